mod header;
mod masonry;
mod share_modal;
mod task_board;
mod task_card;
mod task_modal;
mod toast;

pub use header::Header;
pub use masonry::MasonryGrid;
pub use share_modal::ShareModal;
pub use task_board::TaskBoard;
pub use task_card::TaskCard;
pub use task_modal::{
  ModalMode,
  ModalState,
  TaskModal
};
pub use toast::{
  ToastBus,
  ToastHost,
  ToastKind,
  ToastList,
  push_toast,
  use_toast_bus
};

use yew::{
  Html,
  function_component,
  html
};

#[function_component(Spinner)]
pub fn spinner() -> Html {
  html! {
      <div class="loader">
          <div class="spinner"></div>
      </div>
  }
}

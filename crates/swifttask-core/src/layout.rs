use tracing::trace;

#[derive(
  Debug, Clone, Copy, PartialEq,
)]
pub struct Slot {
  pub column: usize,
  pub x:      f64,
  pub y:      f64,
  pub width:  f64,
  pub height: f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct MasonryLayout {
  pub slots:   Vec<Slot>,
  pub heights: Vec<f64>
}

impl MasonryLayout {
  pub fn container_height(
    &self
  ) -> f64 {
    self
      .heights
      .iter()
      .copied()
      .fold(0.0, f64::max)
  }
}

pub fn column_count(
  width: f64
) -> usize {
  if width >= 1500.0 {
    5
  } else if width >= 1000.0 {
    4
  } else if width >= 600.0 {
    3
  } else {
    1
  }
}

// Greedy shortest-column packing. Card height is uniform, so
// always filling the currently shortest column keeps every
// column within one card of the minimum.
pub fn pack(
  item_count: usize,
  columns: usize,
  container_width: f64,
  item_height: f64
) -> MasonryLayout {
  let columns = columns.max(1);
  let column_width =
    container_width / columns as f64;

  let mut heights =
    vec![0.0_f64; columns];
  let mut slots =
    Vec::with_capacity(item_count);

  for index in 0..item_count {
    let column =
      shortest_column(&heights);
    let slot = Slot {
      column,
      x: column_width * column as f64,
      y: heights[column],
      width: column_width,
      height: item_height
    };

    trace!(
      index,
      column,
      x = slot.x,
      y = slot.y,
      "placed masonry item"
    );

    heights[column] += item_height;
    slots.push(slot);
  }

  MasonryLayout {
    slots,
    heights
  }
}

// Ties resolve to the lowest column index.
fn shortest_column(
  heights: &[f64]
) -> usize {
  let mut best = 0;
  for (index, height) in
    heights.iter().enumerate()
  {
    if *height < heights[best] {
      best = index;
    }
  }
  best
}

#[cfg(test)]
mod tests {
  use super::{
    column_count,
    pack
  };

  #[test]
  fn breakpoint_table_edges() {
    assert_eq!(column_count(1500.0), 5);
    assert_eq!(column_count(1499.0), 4);
    assert_eq!(column_count(1000.0), 4);
    assert_eq!(column_count(999.0), 3);
    assert_eq!(column_count(600.0), 3);
    assert_eq!(column_count(599.0), 1);
    assert_eq!(column_count(0.0), 1);
  }

  #[test]
  fn packs_two_columns_round_robin() {
    let layout =
      pack(4, 2, 800.0, 240.0);

    let xy: Vec<(f64, f64)> = layout
      .slots
      .iter()
      .map(|slot| (slot.x, slot.y))
      .collect();
    assert_eq!(
      xy,
      vec![
        (0.0, 0.0),
        (400.0, 0.0),
        (0.0, 240.0),
        (400.0, 240.0),
      ]
    );

    assert_eq!(
      layout.heights,
      vec![480.0, 480.0]
    );
    assert_eq!(
      layout.container_height(),
      480.0
    );
    assert!(
      layout
        .slots
        .iter()
        .all(|slot| slot.width == 400.0)
    );
  }

  #[test]
  fn columns_stay_within_one_card_of_minimum()
  {
    for columns in 1..=5_usize {
      for count in 0..=40_usize {
        let layout = pack(
          count, columns, 1200.0,
          240.0
        );
        let min = layout
          .heights
          .iter()
          .copied()
          .fold(f64::INFINITY, f64::min);
        let max =
          layout.container_height();
        assert!(
          max - min <= 240.0,
          "imbalance with {count} \
           items in {columns} columns"
        );
      }
    }
  }

  #[test]
  fn layout_is_deterministic() {
    let first =
      pack(9, 3, 1024.0, 240.0);
    let second =
      pack(9, 3, 1024.0, 240.0);
    assert_eq!(first, second);
  }

  #[test]
  fn degenerate_inputs_do_not_panic() {
    let zero_columns =
      pack(3, 0, 900.0, 240.0);
    assert_eq!(
      zero_columns.heights.len(),
      1
    );
    assert_eq!(
      zero_columns.container_height(),
      720.0
    );

    let zero_width =
      pack(3, 3, 0.0, 240.0);
    assert!(
      zero_width
        .slots
        .iter()
        .all(|slot| slot.width == 0.0)
    );
  }
}

use sea_battle::{Coord, Orientation, Vessel};

#[test]
fn test_line_cells() {
    let v = Vessel::line(Coord::new(1, 2), Orientation::Horizontal, 3);
    let cells: Vec<Coord> = v.cells().collect();
    assert_eq!(
        cells,
        vec![Coord::new(1, 2), Coord::new(1, 3), Coord::new(1, 4)]
    );

    let v = Vessel::line(Coord::new(0, 0), Orientation::Vertical, 4);
    assert_eq!(v.len(), 4);
    assert!(v.contains(Coord::new(3, 0)));
    assert!(!v.contains(Coord::new(0, 3)));
}

#[test]
fn test_hits_shrink_until_sunk() {
    let mut v = Vessel::line(Coord::new(2, 2), Orientation::Vertical, 2);
    // a shot elsewhere leaves the vessel alone
    assert!(!v.hit(Coord::new(2, 3)));
    assert_eq!(v.len(), 2);

    assert!(v.hit(Coord::new(2, 2)));
    assert!(!v.is_sunk());
    assert!(v.hit(Coord::new(3, 2)));
    assert!(v.is_sunk());
    // the cell is gone, repeating the hit cannot land
    assert!(!v.hit(Coord::new(3, 2)));
}

#[test]
fn test_from_cells_orders_row_major() {
    let v = Vessel::from_cells([Coord::new(4, 1), Coord::new(2, 1), Coord::new(3, 1)]);
    let cells: Vec<Coord> = v.cells().collect();
    assert_eq!(
        cells,
        vec![Coord::new(2, 1), Coord::new(3, 1), Coord::new(4, 1)]
    );
}

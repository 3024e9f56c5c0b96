use sea_battle::{BoardError, CellMask, Coord};

#[test]
fn test_set_get_and_count() {
    let mut mask = CellMask::<u64>::try_new(5).unwrap();
    assert!(mask.is_empty());
    mask.set(Coord::new(2, 3)).unwrap();
    mask.set(Coord::new(0, 0)).unwrap();
    assert!(mask.get(Coord::new(2, 3)).unwrap());
    assert!(!mask.get(Coord::new(3, 2)).unwrap());
    assert_eq!(mask.count_ones(), 2);
    mask.unset(Coord::new(0, 0)).unwrap();
    assert_eq!(mask.count_ones(), 1);
    mask.clear_all();
    assert!(mask.is_empty());
}

#[test]
fn test_capacity_check() {
    assert!(CellMask::<u8>::try_new(2).is_ok());
    assert_eq!(
        CellMask::<u8>::try_new(3).unwrap_err(),
        BoardError::MaskCapacity {
            size: 3,
            capacity: 8
        }
    );
    assert!(CellMask::<u128>::try_new(10).is_ok());
}

#[test]
fn test_out_of_bounds() {
    let mask = CellMask::<u32>::try_new(4).unwrap();
    assert_eq!(
        mask.get(Coord::new(4, 0)).unwrap_err(),
        BoardError::OutOfBounds(Coord::new(4, 0))
    );
    assert!(!mask.contains(Coord::new(9, 9)));
}

#[test]
fn test_iter_and_bit_ops() {
    let mut a = CellMask::<u32>::try_new(4).unwrap();
    let mut b = CellMask::<u32>::try_new(4).unwrap();
    a.set(Coord::new(0, 1)).unwrap();
    a.set(Coord::new(2, 2)).unwrap();
    b.set(Coord::new(2, 2)).unwrap();

    assert_eq!((a & b).count_ones(), 1);
    assert_eq!((a | b).count_ones(), 2);

    let inverted = !(a | b);
    assert_eq!(inverted.count_ones(), 14);
    assert!(!inverted.contains(Coord::new(2, 2)));
    assert!(inverted.contains(Coord::new(3, 3)));

    let cells: Vec<Coord> = a.iter_set().collect();
    assert_eq!(cells, vec![Coord::new(0, 1), Coord::new(2, 2)]);
}

#[test]
fn test_full_board_complement() {
    // 2x2 board in a u8 leaves the upper nibble unused; the complement must
    // stay within board bounds
    let mask = CellMask::<u8>::try_new(2).unwrap();
    let full = !mask;
    assert_eq!(full.count_ones(), 4);
}

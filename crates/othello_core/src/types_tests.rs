use super::*;

#[test]
fn test_layout_covers_every_cell_once() {
    let mut seen = [false; CELLS];
    for row in LAYOUT {
        for cell in row {
            assert!(!seen[cell as usize], "cell {cell} appears twice");
            seen[cell as usize] = true;
        }
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_coords_round_trip_through_layout() {
    for cell in 0..CELLS {
        assert_eq!(cell_at(row_of(cell), col_of(cell)), Some(cell));
    }
    assert_eq!(cell_at(-1, 0), None);
    assert_eq!(cell_at(0, 6), None);
}

#[test]
fn test_centre_cells() {
    assert_eq!(COORDS[0], (2, 2));
    assert_eq!(COORDS[3], (3, 3));
    assert_eq!(cell_to_coord(0), "c3");
    assert_eq!(coord_to_cell("a1"), Some(4));
    assert_eq!(coord_to_cell("g1"), None);
}

#[test]
fn test_color_helpers() {
    assert_eq!(Color::Max.sign(), 1);
    assert_eq!(Color::Min.sign(), -1);
    assert_eq!(Color::Max.opponent(), Color::Min);
    assert_eq!(Color::from_sign(-1), Some(Color::Min));
    assert_eq!(Color::from_sign(0), None);
    assert_eq!(Color::Min.to_string(), "White");
}

#[test]
fn test_color_serializes_by_side_name() {
    assert_eq!(serde_json::to_string(&Color::Max).unwrap(), "\"black\"");
    assert_eq!(serde_json::from_str::<Color>("\"white\"").unwrap(), Color::Min);
    assert!(serde_json::from_str::<Color>("1").is_err());
    assert!(serde_json::from_str::<Color>("\"red\"").is_err());
}

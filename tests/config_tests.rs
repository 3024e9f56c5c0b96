use sea_battle::{BoardError, GameConfig};

#[test]
fn test_presets_are_valid() {
    assert!(GameConfig::default().validate().is_ok());
    assert!(GameConfig::classic().validate().is_ok());
}

#[test]
fn test_range_checks() {
    assert!(matches!(
        GameConfig::new(0, vec![1]),
        Err(BoardError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        GameConfig::new(11, vec![1]),
        Err(BoardError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        GameConfig::new(6, vec![]),
        Err(BoardError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        GameConfig::new(6, vec![3, 0]),
        Err(BoardError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        GameConfig::new(6, vec![7]),
        Err(BoardError::InvalidConfiguration(_))
    ));
    assert!(GameConfig::new(1, vec![1]).is_ok());
    assert!(GameConfig::new(10, vec![10]).is_ok());
}

#[test]
fn test_json_roundtrip() {
    let config = GameConfig::classic();
    let json = serde_json::to_string(&config).unwrap();
    let back: GameConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

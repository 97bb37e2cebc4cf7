use super::*;

fn menu() -> PopupMenu<i32> {
    PopupMenu::new("Menu", 0)
        .item(MenuItem::tagged("Option 1", 1))
        .item(MenuItem::tagged("Option 2", 2))
        .item(MenuItem::untagged("Cancel"))
        .item(MenuItem::tagged("Another Option With A Long Name", 4))
}

#[test]
fn choosing_a_tagged_item_selects_and_closes() {
    let mut m = menu();
    m.open();
    assert!(m.is_showing());

    assert!(m.choose(1).unwrap());
    assert_eq!(*m.selection(), 2);
    assert!(!m.is_showing());
    assert_eq!(m.selected_item().map(|i| i.label.as_str()), Some("Option 2"));
}

#[test]
fn untagged_or_same_item_leaves_selection_but_still_closes() {
    let mut m = menu();
    m.choose(0).unwrap();

    m.open();
    assert!(!m.choose(2).unwrap());
    assert_eq!(*m.selection(), 1);
    assert!(!m.is_showing());

    m.open();
    assert!(!m.choose(0).unwrap());
    assert!(!m.is_showing());
}

#[test]
fn out_of_range_choice_is_rejected_and_menu_stays_open() {
    let mut m = menu();
    m.open();
    let err = m.choose(9).unwrap_err();
    assert!(err.to_string().contains("no item at index 9"));
    assert!(m.is_showing());
}

#[test]
fn initial_selection_without_matching_row_has_no_selected_item() {
    let m = menu();
    assert!(m.selected_item().is_none());
    assert_eq!(m.metrics, MenuMetrics::STANDARD);
    assert_eq!(m.items().len(), 4);
}

#[test]
fn items_deserialize_with_missing_tags() {
    let items: Vec<MenuItem<String>> =
        serde_json::from_str(r#"[{"label":"a","tag":"x"},{"label":"b"}]"#).unwrap();
    assert_eq!(items[0], MenuItem::tagged("a", "x".to_string()));
    assert_eq!(items[1], MenuItem::untagged("b"));
}

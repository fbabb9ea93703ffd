use datatable_lib::error::ConfigError;
use datatable_lib::model::Column;
use datatable_lib::model::Row;
use datatable_lib::query::Direction;
use datatable_lib::query::PageSize;
use datatable_lib::query::PageToken::Ellipsis;
use datatable_lib::query::PageToken::Page;
use datatable_lib::query::SortState;
use datatable_lib::view::Cell;
use datatable_lib::view::Command;
use datatable_lib::view::DataTable;
use datatable_lib::view::Footer;
use datatable_lib::view::RenderDescriptor;
use datatable_lib::view::Renderer;
use datatable_lib::view::TableConfig;

#[derive(Debug, Default)]
struct Frames(Vec<RenderDescriptor>);

impl Renderer for Frames {
    fn render(&mut self, view: &RenderDescriptor) {
        self.0.push(view.clone());
    }
}

impl Frames {
    fn last(&self) -> &RenderDescriptor {
        self.0.last().expect("at least one frame")
    }
}

fn columns() -> Vec<Column> {
    vec![Column::new("name", "Name"), Column::new("age", "Age")]
}

fn bo_and_al() -> Vec<Row> {
    vec![
        Row::new().set("name", "Bo").set("age", 30i64),
        Row::new().set("name", "Al").set("age", 25i64),
    ]
}

fn numbered(count: i64) -> Vec<Row> {
    (1..=count)
        .map(|n| Row::new().set("n", n).set("label", format!("item {}", n)))
        .collect()
}

fn numbered_table(count: i64, page_size: usize) -> DataTable<Frames> {
    let config = TableConfig::new()
        .with_target(Frames::default())
        .with_columns(vec![Column::new("n", "N"), Column::new("label", "Label")])
        .with_rows(numbered(count))
        .with_page_size(PageSize::Fixed(page_size));
    DataTable::new(config).unwrap()
}

fn first_cells(view: &RenderDescriptor) -> Vec<String> {
    view.body
        .iter()
        .map(|row| row.cells[0].content().to_string())
        .collect()
}

fn summary(view: &RenderDescriptor) -> (usize, usize, Vec<datatable_lib::query::PageToken>) {
    match &view.footer {
        Footer::Summary {
            current_page,
            total_pages,
            page_window,
            ..
        } => (*current_page, *total_pages, page_window.clone()),
        Footer::NoEntries => panic!("expected a summary footer"),
    }
}

#[test]
fn test_missing_target_fails() {
    let config: TableConfig<Frames> = TableConfig::new().with_columns(columns());
    assert_eq!(DataTable::new(config).unwrap_err(), ConfigError::MissingTarget);
}

#[test]
fn test_invalid_config_renders_nothing() {
    let mut frames = 0;
    let config = TableConfig::new()
        .with_target(|_: &RenderDescriptor| frames += 1)
        .with_page_size(PageSize::Fixed(0))
        .with_columns(columns());
    assert!(DataTable::new(config).is_err());
    assert_eq!(frames, 0);
}

#[test]
fn test_initial_render() {
    let config = TableConfig::new()
        .with_target(Frames::default())
        .with_columns(columns())
        .with_rows(bo_and_al())
        .with_page_size(PageSize::Fixed(1));
    let table = DataTable::new(config).unwrap();

    assert_eq!(table.target().0.len(), 1);
    let view = table.target().last();
    assert_eq!(first_cells(view), ["Al"]);
    assert_eq!(view.header[0].sort, Some(Direction::Asc));
    assert_eq!(view.header[1].sort, None);
    assert_eq!(view.search.as_ref().map(|s| s.term.as_str()), Some(""));
    assert_eq!(summary(view), (1, 2, vec![Page(1), Page(2)]));
}

#[test]
fn test_end_to_end_search_and_pages() {
    let config = TableConfig::new()
        .with_target(Frames::default())
        .with_columns(columns())
        .with_rows(bo_and_al())
        .with_page_size(PageSize::Fixed(1));
    let mut table = DataTable::new(config).unwrap();

    table.on_page_activate(2);
    assert_eq!(first_cells(table.target().last()), ["Bo"]);
    assert_eq!(table.state().page, 2);

    table.on_search_input("bo");
    let view = table.target().last();
    assert_eq!(table.state().page, 1);
    assert_eq!(first_cells(view), ["Bo"]);
    // A single page has no navigation.
    assert_eq!(summary(view), (1, 1, vec![]));
    assert_eq!(view.footer.caption(), "Showing 1 to 1 of 1 items");
}

#[test]
fn test_header_toggles_direction() {
    let mut table = numbered_table(5, 10);

    table.on_header_activate("n");
    let view = table.target().last();
    assert_eq!(view.header[0].sort, Some(Direction::Desc));
    assert_eq!(first_cells(view), ["5", "4", "3", "2", "1"]);

    table.on_header_activate("n");
    assert_eq!(first_cells(table.target().last()), ["1", "2", "3", "4", "5"]);

    table.on_header_activate("label");
    assert_eq!(table.state().sort, SortState::asc("label"));
}

#[test]
fn test_sort_keeps_page() {
    let mut table = numbered_table(9, 3);
    table.on_page_activate(2);
    table.on_header_activate("n");
    assert_eq!(table.state().page, 2);
    assert_eq!(first_cells(table.target().last()), ["6", "5", "4"]);
}

#[test]
fn test_sort_mutates_stored_order() {
    let mut table = numbered_table(3, 3);
    table.on_header_activate("n");
    let stored: Vec<String> = table.rows().iter().map(|r| r.value("n").to_string()).collect();
    assert_eq!(stored, ["3", "2", "1"]);
}

#[test]
fn test_ignored_column_is_not_sortable() {
    let config = TableConfig::new()
        .with_target(Frames::default())
        .with_columns(vec![
            Column::new("name", "Name"),
            Column::new("age", "Age").ignore_filtering(),
        ])
        .with_rows(bo_and_al());
    let mut table = DataTable::new(config).unwrap();

    table.on_header_activate("age");
    assert_eq!(table.state().sort, SortState::asc("name"));
    assert!(!table.target().last().header[1].sortable);

    // Ignored columns are not searched either.
    table.on_search_input("30");
    assert!(table.target().last().is_empty());
}

#[test]
fn test_page_past_the_end_resets_to_first() {
    let mut table = numbered_table(10, 3);
    table.on_page_activate(4);
    assert_eq!(first_cells(table.target().last()), ["10"]);

    table.on_page_activate(99);
    assert_eq!(table.state().page, 1);
    assert_eq!(first_cells(table.target().last()), ["1", "2", "3"]);

    table.on_page_activate(3);
    table.on_page_activate(0);
    assert_eq!(table.state().page, 1);
}

#[test]
fn test_page_never_out_of_range_in_descriptors() {
    let mut table = numbered_table(20, 3);
    let commands = [
        Command::Page(7),
        Command::Search("1".into()),
        Command::Page(4),
        Command::Sort("n".into()),
        Command::Search("item 2".into()),
        Command::Page(3),
        Command::Search("".into()),
        Command::Page(100),
    ];
    for command in commands {
        table.dispatch(command);
    }
    for view in &table.target().0 {
        if let Footer::Summary {
            current_page,
            total_pages,
            ..
        } = view.footer
        {
            assert!((1..=total_pages).contains(&current_page));
        }
    }
}

#[test]
fn test_next_and_previous_page() {
    let mut table = numbered_table(7, 3);
    table.previous_page();
    assert_eq!(table.state().page, 1);
    table.next_page();
    table.next_page();
    table.next_page();
    assert_eq!(table.state().page, 3);
    table.previous_page();
    assert_eq!(table.state().page, 2);

    table.on_search_input("item 1");
    assert_eq!(table.total_pages(), 1);
    table.next_page();
    assert_eq!(table.state().page, 1);
}

#[test]
fn test_page_window_in_footer() {
    let mut table = numbered_table(30, 3);
    assert_eq!(
        summary(table.target().last()).2,
        vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
    );
    table.on_page_activate(5);
    assert_eq!(
        summary(table.target().last()).2,
        vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
    );
}

#[test]
fn test_range_caption() {
    let mut table = numbered_table(10, 3);
    table.on_page_activate(4);
    assert_eq!(
        table.target().last().footer.caption(),
        "Showing 10 to 10 of 10 items"
    );
    table.on_page_activate(2);
    assert_eq!(
        table.target().last().footer.caption(),
        "Showing 4 to 6 of 10 items"
    );
}

#[test]
fn test_empty_result() {
    let mut table = numbered_table(5, 3);
    table.on_search_input("zzz");
    let view = table.target().last();
    assert!(view.is_empty());
    assert!(view.body.is_empty());
    assert_eq!(view.footer, Footer::NoEntries);
    assert_eq!(table.state().page, 1);
}

#[test]
fn test_empty_dataset() {
    let config = TableConfig::new()
        .with_target(Frames::default())
        .with_columns(columns());
    let table = DataTable::new(config).unwrap();
    assert!(table.target().last().is_empty());
    assert_eq!(table.state().page, 1);
}

#[test]
fn test_search_disabled() {
    let config = TableConfig::new()
        .with_target(Frames::default())
        .with_columns(columns())
        .with_rows(bo_and_al())
        .with_search(false);
    let mut table = DataTable::new(config).unwrap();
    assert!(table.target().last().search.is_none());

    table.on_search_input("bo");
    assert!(table.state().search.is_empty());
    assert_eq!(table.target().last().body.len(), 2);
}

#[test]
fn test_unpaginated() {
    let config = TableConfig::new()
        .with_target(Frames::default())
        .with_columns(vec![Column::new("n", "N")])
        .with_rows(numbered(50))
        .unpaginated();
    let mut table = DataTable::new(config).unwrap();
    let view = table.target().last();
    assert_eq!(view.body.len(), 50);
    assert_eq!(summary(view), (1, 1, vec![]));

    table.on_page_activate(3);
    assert_eq!(table.state().page, 1);
}

#[test]
fn test_set_rows_keeps_search_sort_and_page() {
    let mut table = numbered_table(12, 3);
    table.on_header_activate("n");
    table.on_page_activate(2);

    table.set_rows(numbered(5));
    assert_eq!(table.state().page, 2);
    assert_eq!(table.state().sort, SortState::desc("n"));
    assert_eq!(first_cells(table.target().last()), ["2", "1"]);

    // Shrinking past the current page starts over on page 1.
    table.on_page_activate(2);
    table.set_rows(numbered(2));
    assert_eq!(table.state().page, 1);
    assert_eq!(first_cells(table.target().last()), ["2", "1"]);

    table.on_search_input("item 3");
    table.set_rows(numbered(40));
    // "item 3" matches 3 and 30..=39
    assert_eq!(
        table.target().last().footer.caption(),
        "Showing 1 to 3 of 11 items"
    );
}

#[test]
fn test_refresh_is_idempotent() {
    let mut table = numbered_table(8, 3);
    table.on_header_activate("label");
    table.on_page_activate(2);
    table.refresh();
    table.refresh();
    let frames = &table.target().0;
    let n = frames.len();
    assert_eq!(frames[n - 1], frames[n - 2]);
    assert_eq!(frames[n - 2], frames[n - 3]);
}

#[test]
fn test_descriptor_does_not_render() {
    let mut table = numbered_table(4, 3);
    let before = table.target().0.len();
    let view = table.descriptor();
    assert_eq!(table.target().0.len(), before);
    assert_eq!(&view, table.target().last());
}

#[test]
fn test_cell_renderer_markup() {
    let config = TableConfig::new()
        .with_target(Frames::default())
        .with_columns(vec![
            Column::new("name", "Name"),
            Column::new("age", "Age")
                .ignore_filtering()
                .with_cell(|row| format!("<em>{}</em>", row.value("age"))),
        ])
        .with_rows(bo_and_al());
    let table = DataTable::new(config).unwrap();
    let view = table.target().last();
    assert_eq!(view.body[0].cells[1], Cell::Markup("<em>25</em>".into()));
    assert_eq!(view.body[0].cells[0], Cell::Text("Al".into()));
}

#[test]
fn test_descriptor_serializes() {
    let table = numbered_table(7, 3);
    let json = serde_json::to_value(table.target().last()).unwrap();
    assert_eq!(json["footer"]["kind"], "summary");
    assert_eq!(json["footer"]["total_pages"], 3);
    assert_eq!(json["footer"]["page_window"][0]["kind"], "page");
    assert_eq!(json["body"][0]["cells"][0]["content"], "1");
}

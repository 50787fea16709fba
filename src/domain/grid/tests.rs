use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::domain::entities::column::{Column, ColumnSchema};
use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::entities::view::{SortDirection, SortSpec, ViewOptions, ViewState};
use crate::domain::error::GridConfigError;
use crate::domain::grid::filter::filter_indices;
use crate::domain::grid::paginate::{page_range, total_pages};
use crate::domain::grid::sort::sort_indices;
use crate::domain::grid::{compose, GridView, RowActions};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    id: u32,
    name: String,
    age: Option<i64>,
    city: String,
    joined: NaiveDate,
}

impl Record for Person {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn value(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(i64::from(self.id).into()),
            "name" => Some(self.name.as_str().into()),
            "age" => Some(self.age.into()),
            "city" => Some(self.city.as_str().into()),
            "joined" => Some(self.joined.into()),
            _ => None,
        }
    }
}

/// Loosely typed row for mixed-type columns.
#[derive(Debug, Clone, PartialEq)]
struct Cell {
    id: u32,
    code: FieldValue,
}

impl Record for Cell {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn value(&self, key: &str) -> Option<FieldValue> {
        match key {
            "code" => Some(self.code.clone()),
            _ => None,
        }
    }
}

fn person(id: u32, name: &str, age: Option<i64>, city: &str) -> Person {
    Person {
        id,
        name: name.to_string(),
        age,
        city: city.to_string(),
        joined: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
            + chrono::Duration::days(i64::from(id)),
    }
}

fn people() -> Vec<Person> {
    vec![
        person(1, "Olga Smirnova", Some(34), "Kazan"),
        person(2, "Ivan Petrov", Some(41), "Moscow"),
        person(3, "anna Kuznetsova", None, "Samara"),
        person(4, "Boris Volkov", Some(9), "moscow"),
        person(5, "Дмитрий Орлов", Some(27), "Tver"),
    ]
}

fn numbered(count: u32) -> Vec<Person> {
    (1..=count)
        .map(|id| person(id, &format!("Person {id:02}"), Some(i64::from(id)), "Omsk"))
        .collect()
}

fn schema() -> ColumnSchema<Person> {
    ColumnSchema::new(vec![
        Column::new("name", "Name"),
        Column::new("age", "Age"),
        Column::new("city", "City").unsortable(),
        Column::new("joined", "Joined"),
    ])
    .expect("schema should be valid")
}

fn page_size(size: usize) -> NonZeroUsize {
    NonZeroUsize::new(size).expect("page size should be non-zero")
}

fn ids(rows: &[&Person]) -> Vec<u32> {
    rows.iter().map(|row| row.id).collect()
}

fn grid(records: Vec<Person>, size: usize) -> GridView<Person> {
    GridView::with_records(
        schema(),
        ViewOptions::default().with_page_size(page_size(size)),
        records,
    )
    .expect("records should match schema")
}

#[test]
fn filter_with_absent_term_returns_nothing() {
    let records = people();
    let schema = schema();

    let matched = filter_indices(&records, schema.columns(), "zzz-not-there");

    assert!(matched.is_empty(), "no record contains the term");
}

#[test]
fn filter_with_blank_term_is_identity() {
    let records = people();
    let schema = schema();

    assert_eq!(filter_indices(&records, schema.columns(), ""), vec![0, 1, 2, 3, 4]);
    assert_eq!(
        filter_indices(&records, schema.columns(), "   "),
        vec![0, 1, 2, 3, 4],
        "whitespace-only term should not filter"
    );
}

#[test]
fn filter_is_case_insensitive_across_scripts() {
    let mut records = people();
    records.push(person(6, "Иван Сидоров", Some(50), "Perm"));
    let schema = schema();

    let latin = filter_indices(&records, schema.columns(), "ivan");
    let cyrillic = filter_indices(&records, schema.columns(), "иван");

    assert_eq!(latin, vec![1], "only Ivan Petrov should match");
    assert_eq!(cyrillic, vec![5], "only Иван Сидоров should match");
}

#[test]
fn filter_matches_any_declared_column() {
    let records = people();
    let schema = schema();

    assert_eq!(
        filter_indices(&records, schema.columns(), "MOSCOW"),
        vec![1, 3]
    );
    assert_eq!(filter_indices(&records, schema.columns(), "41"), vec![1]);
    assert_eq!(
        filter_indices(&records, schema.columns(), "2024-01-03"),
        vec![1],
        "dates should be searchable by their ISO form"
    );
}

#[test]
fn filter_ignores_undeclared_fields_and_nulls() {
    let records = people();
    let name_only = ColumnSchema::new(vec![Column::new("name", "Name")])
        .expect("schema should be valid");

    assert!(filter_indices(&records, name_only.columns(), "kazan").is_empty());

    let age_only =
        ColumnSchema::new(vec![Column::new("age", "Age")]).expect("schema should be valid");
    let matched = filter_indices(&records, age_only.columns(), "null");
    assert!(matched.is_empty(), "null values never match");
}

#[test]
fn sort_orders_names_case_insensitively() {
    let records = people();
    let mut indices: Vec<usize> = (0..records.len()).collect();

    sort_indices(&records, &mut indices, "name", SortDirection::Asc);

    let names: Vec<&str> = indices.iter().map(|&i| records[i].name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "anna Kuznetsova",
            "Boris Volkov",
            "Ivan Petrov",
            "Olga Smirnova",
            "Дмитрий Орлов"
        ]
    );
}

#[test]
fn sort_compares_numbers_numerically_with_nulls_first_ascending() {
    let records = people();
    let mut ascending: Vec<usize> = (0..records.len()).collect();
    let mut descending = ascending.clone();

    sort_indices(&records, &mut ascending, "age", SortDirection::Asc);
    sort_indices(&records, &mut descending, "age", SortDirection::Desc);

    let asc_ages: Vec<Option<i64>> = ascending.iter().map(|&i| records[i].age).collect();
    let desc_ages: Vec<Option<i64>> = descending.iter().map(|&i| records[i].age).collect();
    assert_eq!(asc_ages, vec![None, Some(9), Some(27), Some(34), Some(41)]);
    assert_eq!(desc_ages, vec![Some(41), Some(34), Some(27), Some(9), None]);
}

#[test]
fn sort_mixed_column_falls_back_to_text() {
    let records = vec![
        Cell { id: 1, code: FieldValue::Int(10) },
        Cell { id: 2, code: FieldValue::Text("5x".into()) },
        Cell { id: 3, code: FieldValue::Int(9) },
        Cell { id: 4, code: FieldValue::Null },
    ];
    let mut indices: Vec<usize> = (0..records.len()).collect();

    sort_indices(&records, &mut indices, "code", SortDirection::Asc);

    let order: Vec<u32> = indices.iter().map(|&i| records[i].id).collect();
    assert_eq!(order, vec![4, 1, 2, 3], "text order: null, \"10\", \"5x\", \"9\"");
}

#[test]
fn sort_keeps_large_integers_exact() {
    let records = vec![
        Cell { id: 1, code: FieldValue::Int(9_007_199_254_740_993) },
        Cell { id: 2, code: FieldValue::Int(9_007_199_254_740_992) },
        Cell { id: 3, code: FieldValue::Float(9_007_199_254_740_990.0) },
    ];
    let mut ascending: Vec<usize> = (0..records.len()).collect();
    let mut descending = ascending.clone();

    sort_indices(&records, &mut ascending, "code", SortDirection::Asc);
    sort_indices(&records, &mut descending, "code", SortDirection::Desc);

    let asc: Vec<u32> = ascending.iter().map(|&i| records[i].id).collect();
    let desc: Vec<u32> = descending.iter().map(|&i| records[i].id).collect();
    assert_eq!(asc, vec![3, 2, 1]);
    assert_eq!(desc, vec![1, 2, 3]);
}

#[test]
fn sort_twice_matches_direct_descending_and_keeps_every_record() {
    let mut records = people();
    records.push(person(6, "ivan petrov", Some(41), "Moscow"));
    let all: Vec<usize> = (0..records.len()).collect();

    for key in ["name", "age", "joined"] {
        let mut twice = all.clone();
        sort_indices(&records, &mut twice, key, SortDirection::Asc);
        sort_indices(&records, &mut twice, key, SortDirection::Desc);

        let mut direct = all.clone();
        sort_indices(&records, &mut direct, key, SortDirection::Desc);

        assert_eq!(twice, direct, "double sort by {key} should match direct sort");

        let mut seen = direct.clone();
        seen.sort_unstable();
        assert_eq!(seen, all, "sort by {key} should neither drop nor duplicate");
    }
}

#[test]
fn pages_concatenate_back_into_the_sorted_sequence() {
    let records = numbered(23);
    let schema = schema();
    let state = ViewState {
        search_term: "person 1".into(),
        sort: Some(SortSpec {
            key: "age".into(),
            direction: SortDirection::Desc,
        }),
        ..ViewState::default()
    };

    for size in 1..=25 {
        let size = page_size(size);
        let options = ViewOptions::default().with_page_size(size);
        let full = compose(&records, &schema, &state, &options).sorted;
        let full_ids: Vec<u32> = full.iter().map(|&i| records[i].id).collect();
        assert_eq!(
            full_ids,
            vec![19, 18, 17, 16, 15, 14, 13, 12, 11, 10],
            "only Person 10..19 match, oldest first"
        );
        let pages = total_pages(full.len(), size);

        let mut joined = Vec::new();
        for page in 1..=pages {
            let page_state = ViewState {
                current_page: page,
                ..state.clone()
            };
            let derived = compose(&records, &schema, &page_state, &options);
            assert!(!derived.paged().is_empty(), "page {page} should not be empty");
            joined.extend_from_slice(derived.paged());
        }

        assert_eq!(joined, full, "pages of size {size} should rebuild the sequence");
    }
}

#[test]
fn page_range_tolerates_out_of_range_pages() {
    assert_eq!(page_range(5, 3, page_size(10)), 5..5);
    assert_eq!(page_range(5, 0, page_size(10)), 5..5);
    assert_eq!(page_range(0, 1, page_size(10)), 0..0);
    assert_eq!(page_range(25, 3, page_size(10)), 20..25);
    assert_eq!(total_pages(0, page_size(10)), 0);
    assert_eq!(total_pages(10, page_size(10)), 1);
    assert_eq!(total_pages(11, page_size(10)), 2);
}

#[test]
fn compose_is_idempotent() {
    let records = people();
    let schema = schema();
    let state = ViewState {
        current_page: 1,
        search_term: "o".into(),
        sort: Some(SortSpec {
            key: "name".into(),
            direction: SortDirection::Desc,
        }),
    };
    let options = ViewOptions::default().with_page_size(page_size(2));

    let first = compose(&records, &schema, &state, &options);
    let second = compose(&records, &schema, &state, &options);

    assert_eq!(first, second);
}

#[test]
fn twenty_five_rows_split_into_three_pages() {
    let mut view = grid(numbered(25), 10);

    assert_eq!(view.total_pages(), 3);
    assert_eq!(view.page_rows().len(), 10);

    assert_eq!(view.set_page(3), 3);
    assert_eq!(view.page_rows().len(), 5);
    assert_eq!(ids(&view.page_rows()), vec![21, 22, 23, 24, 25]);
}

#[test]
fn toggling_sort_twice_restores_ascending_order() {
    let mut view = grid(people(), 10);

    assert!(view.sort("name"));
    let ascending = ids(&view.sorted_rows());
    assert!(view.sort("name"));
    assert_eq!(view.sort_direction_of("name"), Some(SortDirection::Desc));
    assert!(view.sort("name"));

    assert_eq!(view.sort_direction_of("name"), Some(SortDirection::Asc));
    assert_eq!(ids(&view.sorted_rows()), ascending);
}

#[test]
fn selecting_a_new_sort_key_starts_ascending() {
    let mut view = grid(people(), 10);
    view.sort("name");
    view.sort("name");

    assert!(view.sort("age"));

    assert_eq!(view.sort_direction_of("age"), Some(SortDirection::Asc));
    assert_eq!(view.sort_direction_of("name"), None);
}

#[test]
fn search_for_ivan_finds_one_row() {
    let mut view = grid(people(), 10);

    view.search("ivan");

    assert_eq!(view.total_items(), 1);
    assert_eq!(ids(&view.filtered_rows()), vec![2]);
}

#[test]
fn deleting_last_row_of_second_page_clamps_to_first_page() {
    let mut view = grid(numbered(11), 10);
    assert_eq!(view.set_page(2), 2);
    assert_eq!(ids(&view.page_rows()), vec![11]);

    let removed = view.remove_record(&11);

    assert_eq!(removed.map(|row| row.id), Some(11));
    assert_eq!(view.total_pages(), 1);
    assert_eq!(view.current_page(), 1, "page should clamp instead of going blank");
    assert_eq!(view.page_rows().len(), 10);
}

#[test]
fn search_sort_and_new_records_reset_the_page() {
    let mut view = grid(numbered(30), 10);

    view.set_page(3);
    view.search("person");
    assert_eq!(view.current_page(), 1, "search should reset the page");

    view.set_page(2);
    view.sort("age");
    assert_eq!(view.current_page(), 1, "sort should reset the page");

    view.set_page(3);
    view.set_records(numbered(30))
        .expect("records should match schema");
    assert_eq!(view.current_page(), 1, "new collection should reset the page");
}

#[test]
fn repeating_the_same_search_keeps_the_page() {
    let mut view = grid(numbered(30), 10);
    view.search("person");
    view.set_page(2);

    view.search("person");

    assert_eq!(view.current_page(), 2);
}

#[test]
fn page_size_change_keeps_the_page_but_clamps_it() {
    let mut view = grid(numbered(30), 5);
    view.set_page(3);

    view.set_page_size(page_size(10));
    assert_eq!(view.current_page(), 3, "page size change should not reset");
    assert_eq!(ids(&view.page_rows()).first(), Some(&21));

    view.set_page_size(page_size(25));
    assert_eq!(view.current_page(), 2, "page beyond the end should clamp");
}

#[test]
fn set_page_clamps_to_available_pages() {
    let mut view = grid(numbered(25), 10);

    assert_eq!(view.set_page(99), 3);
    assert_eq!(view.set_page(0), 1);
    assert_eq!(view.next_page(), 2);
    assert_eq!(view.previous_page(), 1);
    assert_eq!(view.previous_page(), 1);
}

#[test]
fn upsert_keeps_the_page_and_replaces_by_id() {
    let mut view = grid(numbered(25), 10);
    view.set_page(2);

    view.upsert_record(person(15, "Renamed", Some(15), "Omsk"))
        .expect("record should match schema");
    view.upsert_record(person(26, "Newcomer", Some(26), "Omsk"))
        .expect("record should match schema");

    assert_eq!(view.current_page(), 2);
    assert_eq!(view.total_items(), 26);
    assert!(view.page_rows().iter().any(|row| row.name == "Renamed"));
}

#[test]
fn unsortable_columns_and_disabled_stages_are_ignored() {
    let mut view = grid(people(), 10);
    assert!(!view.sort("city"), "city column is not sortable");
    assert!(!view.sort("missing"), "unknown keys are ignored");
    assert!(view.state().sort.is_none());

    let options = ViewOptions {
        searchable: false,
        sortable: false,
        ..ViewOptions::default()
    };
    let mut locked = GridView::with_records(schema(), options, people())
        .expect("records should match schema");
    locked.search("ivan");
    assert!(!locked.sort("name"));
    assert_eq!(locked.total_items(), 5);
    assert_eq!(ids(&locked.page_rows()), vec![1, 2, 3, 4, 5]);
}

#[test]
fn schema_rejects_bad_definitions() {
    assert_eq!(
        ColumnSchema::<Person>::new(Vec::new()).err(),
        Some(GridConfigError::NoColumns)
    );
    assert_eq!(
        ColumnSchema::<Person>::new(vec![Column::new("name", "A"), Column::new("name", "B")])
            .err(),
        Some(GridConfigError::DuplicateColumn { key: "name".into() })
    );
    assert_eq!(
        ColumnSchema::<Person>::new(vec![Column::new(" ", "Blank")]).err(),
        Some(GridConfigError::EmptyKey {
            title: "Blank".into()
        })
    );
}

#[test]
fn unknown_field_is_reported_and_previous_records_are_kept() {
    let bad_schema = ColumnSchema::new(vec![
        Column::new("name", "Name"),
        Column::new("salary", "Salary"),
    ])
    .expect("schema shape is valid");
    let mut view = GridView::new(bad_schema, ViewOptions::default());

    let err = view
        .set_records(people())
        .expect_err("salary is not a Person field");

    assert_eq!(
        err,
        GridConfigError::UnknownField {
            key: "salary".into(),
            title: "Salary".into(),
            record: "1".into(),
        }
    );
    assert!(view.records().is_empty(), "failed update should keep old records");
}

#[test]
fn renderer_controls_cell_text() {
    let column = Column::<Person>::new("age", "Age")
        .width("80px")
        .render(|value, record| match value {
            FieldValue::Null => format!("{} (n/a)", record.name),
            other => format!("{other} y"),
        });
    let records = people();

    assert_eq!(column.display(&records[0]), "34 y");
    assert_eq!(column.display(&records[2]), "anna Kuznetsova (n/a)");
    assert_eq!(Column::<Person>::new("age", "Age").display(&records[2]), "");
}

#[test]
fn row_actions_are_passed_through() {
    let log = Rc::new(RefCell::new(Vec::<String>::new()));
    let (add_log, edit_log, delete_log) = (log.clone(), log.clone(), log.clone());
    let actions = RowActions::<Person>::new()
        .on_add(move || add_log.borrow_mut().push("add".into()))
        .on_edit(move |row: &Person| edit_log.borrow_mut().push(format!("edit {}", row.name)))
        .on_delete(move |id: u32| delete_log.borrow_mut().push(format!("delete {id}")));
    let mut view = grid(people(), 10).with_actions(actions);

    assert!(view.add());
    assert!(view.edit(&2));
    assert!(view.delete(&4));
    assert!(!view.delete(&99), "unknown ids are not forwarded");

    assert_eq!(
        *log.borrow(),
        vec!["add", "edit Ivan Petrov", "delete 4"]
    );
    assert_eq!(view.total_items(), 5, "the grid never deletes on its own");
}

#[test]
fn missing_handlers_report_unavailable_actions() {
    let mut view = grid(people(), 10);

    assert!(!view.can_add() && !view.can_edit() && !view.can_delete());
    assert!(!view.add());
    assert!(!view.edit(&1));
}

#[test]
fn empty_state_is_distinct_from_loading() {
    let mut view = GridView::new(schema(), ViewOptions::default().with_loading(true));
    assert!(view.is_loading());
    assert!(!view.is_empty(), "loading grid should not claim to be empty");

    view.set_loading(false);
    assert!(view.is_empty());
    assert_eq!(view.total_pages(), 0);
    assert_eq!(view.current_page(), 1);
}

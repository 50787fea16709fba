use std::num::NonZeroUsize;

use dioxus::prelude::*;

use crate::config::PAGE_SIZE_CHOICES;
use crate::domain::entities::record::Record;
use crate::domain::entities::view::SortDirection;
use crate::domain::grid::GridView;
use crate::ui::style::{table_container_style, table_header_cell_style, TABLE_CELL_STYLE};

#[derive(Clone, PartialEq)]
struct HeaderCell {
    key: String,
    title: String,
    style: String,
    indicator: &'static str,
}

fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => "",
    }
}

pub fn data_grid<R: Record + 'static>(mut grid: Signal<GridView<R>>) -> Element {
    let view = grid.read();

    let headers: Vec<HeaderCell> = view
        .columns()
        .iter()
        .map(|column| HeaderCell {
            key: column.key.clone(),
            title: column.title.clone(),
            style: table_header_cell_style(column.width.as_deref()),
            indicator: sort_indicator(view.sort_direction_of(&column.key)),
        })
        .collect();
    let rows: Vec<(R::Id, Vec<String>)> = view
        .page_rows()
        .into_iter()
        .map(|record| {
            let cells = view
                .columns()
                .iter()
                .map(|column| column.display(record))
                .collect();
            (record.id(), cells)
        })
        .collect();

    let searchable = view.options().searchable;
    let search_term = view.state().search_term.clone();
    let loading = view.is_loading();
    let empty = view.is_empty();
    let can_add = view.can_add() && !loading;
    let can_edit = view.can_edit();
    let can_delete = view.can_delete();
    let has_row_actions = can_edit || can_delete;
    let column_span = headers.len() + usize::from(has_row_actions);
    let total_items = view.total_items();
    let current_page = view.current_page();
    let page_count = view.total_pages().max(1);
    let page_size = view.options().page_size;
    let actions_header_style = table_header_cell_style(Some("140px"));
    drop(view);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; min-height: 0; flex: 1;",
            div {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
                if searchable {
                    input {
                        r#type: "search",
                        placeholder: "Search all columns",
                        value: "{search_term}",
                        oninput: move |event| grid.write().search(&event.value()),
                    }
                }
                if can_add {
                    button {
                        onclick: move |_| {
                            grid.write().add();
                        },
                        "Add"
                    }
                }
                span { style: "color: #555;", "{total_items} records" }
            }

            div {
                style: "{table_container_style()}",
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            {headers.into_iter().map(|header| {
                                let key = header.key.clone();
                                rsx!(
                                    th {
                                        key: "{header.key}",
                                        style: "{header.style}",
                                        onclick: move |_| {
                                            grid.write().sort(&key);
                                        },
                                        "{header.title}{header.indicator}"
                                    }
                                )
                            })}
                            if has_row_actions {
                                th { style: "{actions_header_style}", "" }
                            }
                        }
                    }
                    tbody {
                        if loading {
                            tr {
                                td { style: "{TABLE_CELL_STYLE} text-align: center; color: #777;",
                                    colspan: "{column_span}",
                                    "Loading..."
                                }
                            }
                        } else if empty {
                            tr {
                                td { style: "{TABLE_CELL_STYLE} text-align: center; color: #777;",
                                    colspan: "{column_span}",
                                    "No records"
                                }
                            }
                        } else {
                            {rows.into_iter().map(|(id, cells)| {
                                let edit_id = id.clone();
                                let delete_id = id;
                                rsx!(
                                    tr {
                                        {cells.into_iter().map(|cell| rsx!(
                                            td { style: "{TABLE_CELL_STYLE}", "{cell}" }
                                        ))}
                                        if has_row_actions {
                                            td { style: "{TABLE_CELL_STYLE} text-align: center; white-space: nowrap;",
                                                if can_edit {
                                                    button {
                                                        onclick: move |_| {
                                                            grid.write().edit(&edit_id);
                                                        },
                                                        "Edit"
                                                    }
                                                }
                                                if can_delete {
                                                    button {
                                                        style: "margin-left: 4px; color: #b22;",
                                                        onclick: move |_| {
                                                            grid.write().delete(&delete_id);
                                                        },
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                )
                            })}
                        }
                    }
                }
            }

            div {
                style: "display: flex; gap: 8px; align-items: center;",
                button {
                    disabled: current_page <= 1,
                    onclick: move |_| {
                        grid.write().previous_page();
                    },
                    "Previous"
                }
                span { "Page {current_page} of {page_count}" }
                button {
                    disabled: current_page >= page_count,
                    onclick: move |_| {
                        grid.write().next_page();
                    },
                    "Next"
                }
                select {
                    onchange: move |event| {
                        if let Some(size) = event.value().parse::<usize>().ok().and_then(NonZeroUsize::new) {
                            grid.write().set_page_size(size);
                        }
                    },
                    for choice in PAGE_SIZE_CHOICES {
                        option {
                            value: "{choice}",
                            selected: choice == page_size,
                            "{choice} per page"
                        }
                    }
                }
            }
        }
    }
}

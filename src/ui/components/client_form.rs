use dioxus::prelude::*;

use crate::domain::entities::client::ClientDraft;
use crate::ui::style::modal_backdrop_style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DraftField {
    Company,
    Contact,
    Inn,
    City,
    FleetSize,
    CreditLimit,
    Phone,
    RegisteredOn,
}

impl DraftField {
    const ALL: [DraftField; 8] = [
        DraftField::Company,
        DraftField::Contact,
        DraftField::Inn,
        DraftField::City,
        DraftField::FleetSize,
        DraftField::CreditLimit,
        DraftField::Phone,
        DraftField::RegisteredOn,
    ];

    fn label(self) -> &'static str {
        match self {
            DraftField::Company => "Company *",
            DraftField::Contact => "Contact person",
            DraftField::Inn => "INN *",
            DraftField::City => "City",
            DraftField::FleetSize => "Fleet size",
            DraftField::CreditLimit => "Credit limit",
            DraftField::Phone => "Phone",
            DraftField::RegisteredOn => "Registered on (YYYY-MM-DD)",
        }
    }

    fn get(self, draft: &ClientDraft) -> &str {
        match self {
            DraftField::Company => &draft.company,
            DraftField::Contact => &draft.contact,
            DraftField::Inn => &draft.inn,
            DraftField::City => &draft.city,
            DraftField::FleetSize => &draft.fleet_size,
            DraftField::CreditLimit => &draft.credit_limit,
            DraftField::Phone => &draft.phone,
            DraftField::RegisteredOn => &draft.registered_on,
        }
    }

    fn set(self, draft: &mut ClientDraft, value: String) {
        let slot = match self {
            DraftField::Company => &mut draft.company,
            DraftField::Contact => &mut draft.contact,
            DraftField::Inn => &mut draft.inn,
            DraftField::City => &mut draft.city,
            DraftField::FleetSize => &mut draft.fleet_size,
            DraftField::CreditLimit => &mut draft.credit_limit,
            DraftField::Phone => &mut draft.phone,
            DraftField::RegisteredOn => &mut draft.registered_on,
        };
        *slot = value;
    }
}

#[component]
pub fn ClientForm(
    draft: ClientDraft,
    error: Option<String>,
    busy: bool,
    on_save: EventHandler<ClientDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let initial = draft.clone();
    let mut form = use_signal(move || initial);
    let title = if draft.id.is_some() {
        "Edit client"
    } else {
        "New client"
    };
    let fields: Vec<(DraftField, &'static str, String)> = {
        let current = form.read();
        DraftField::ALL
            .into_iter()
            .map(|field| (field, field.label(), field.get(&current).to_string()))
            .collect()
    };

    rsx! {
        div {
            style: "{modal_backdrop_style()}",
            div {
                style: "background: #fff; border-radius: 6px; padding: 16px; min-width: 420px; display: flex; flex-direction: column; gap: 8px;",
                h3 { style: "margin: 0 0 8px 0;", "{title}" }
                for (field, caption, value) in fields {
                    label {
                        key: "{caption}",
                        style: "display: flex; flex-direction: column; gap: 2px;",
                        span { style: "font-size: 12px; color: #555;", "{caption}" }
                        input {
                            value: "{value}",
                            oninput: move |event| field.set(&mut form.write(), event.value()),
                        }
                    }
                }
                if let Some(message) = error {
                    p { style: "color: #b22; margin: 4px 0;", "{message}" }
                }
                div {
                    style: "display: flex; gap: 8px; justify-content: flex-end; margin-top: 8px;",
                    button {
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        disabled: busy,
                        onclick: move |_| on_save.call(form()),
                        "Save"
                    }
                }
            }
        }
    }
}

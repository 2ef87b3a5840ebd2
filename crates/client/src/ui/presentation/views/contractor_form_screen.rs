//! Contractor Form Screen - collect contractor identity and photo, then submit

use dioxus::prelude::*;

use crate::application::form::ContractorForm;
use crate::ui::presentation::components::{Picker, PickerItem, RequiredText};
use crate::ui::presentation::services::{use_contractor_service, use_image_service};
use crate::ui::{use_platform, use_theme};
use contractor_domain::{EntityType, Field};

#[component]
pub fn ContractorFormScreen() -> Element {
    let platform = use_platform();
    let theme = use_theme();
    let contractor_service = use_contractor_service();
    let image_service = use_image_service();

    let mut form = use_signal(ContractorForm::new);
    let mut is_picking = use_signal(|| false);

    let entity_items: Vec<PickerItem> = EntityType::all()
        .iter()
        .map(|t| PickerItem::new(t.label(), t.wire_value()))
        .collect();

    let current = form.read().clone();
    let draft = current.draft();
    let first_name = draft.first_name.clone();
    let last_name = draft.last_name.clone();
    let identification_number = draft.identification_number.clone();
    let selected_type = current.entity_type().wire_value().to_string();
    let placeholder = current.identification_placeholder();
    let photo_uri = current.photo().map(|p| p.as_str().to_string());
    let first_name_error = current.error(Field::FirstName);
    let last_name_error = current.error(Field::LastName);
    let identification_error = current.error(Field::IdentificationNumber);

    let input_style = theme.input_style();
    let picking = is_picking();
    let submitting = current.is_submitting();

    let select_platform = platform.clone();
    let on_select_image = move |_: MouseEvent| {
        if is_picking() {
            return;
        }
        is_picking.set(true);
        let service = image_service.clone();
        let platform = select_platform.clone();
        spawn(async move {
            let selection = service.select_image().await;
            if let Some(photo) = selection.photo() {
                form.write().set_photo(photo.clone());
            }
            is_picking.set(false);
            if let Some(message) = selection.alert_message() {
                platform.alert(&message).await;
            }
        });
    };

    let submit_platform = platform.clone();
    let on_submit = move |_: MouseEvent| {
        // Reveals every inline error; blocked attempts never reach the network.
        let Some(attempt) = form.write().begin_submit() else {
            submit_platform.log_debug("Submit ignored while a request is in flight");
            return;
        };
        let service = contractor_service.clone();
        let platform = submit_platform.clone();
        spawn(async move {
            let outcome = service.submit(attempt).await;
            let cleared = form.write().finish_submit(outcome.is_sent());
            if outcome.is_sent() && !cleared {
                platform.log_info("Contractor sent; keeping edits made during the request");
            }
            if let Some(message) = outcome.alert_message() {
                platform.alert(&message).await;
            }
        });
    };

    rsx! {
        div {
            class: "contractor-form",
            style: "margin-top: 50px; display: flex; flex-direction: column;",

            input {
                r#type: "text",
                style: "{input_style}",
                placeholder: "First name",
                value: "{first_name}",
                oninput: move |e| form.write().set_first_name(e.value()),
                onblur: move |_| form.write().blur(Field::FirstName),
            }
            if let Some(error) = first_name_error {
                RequiredText { "{error}" }
            }

            input {
                r#type: "text",
                style: "{input_style}",
                placeholder: "Last name",
                value: "{last_name}",
                oninput: move |e| form.write().set_last_name(e.value()),
                onblur: move |_| form.write().blur(Field::LastName),
            }
            if let Some(error) = last_name_error {
                RequiredText { "{error}" }
            }

            div {
                style: "margin-bottom: 120px;",
                Picker {
                    items: entity_items,
                    selected: selected_type,
                    on_change: move |value: String| match value.parse::<EntityType>() {
                        Ok(entity_type) => form.write().select_entity_type(entity_type),
                        Err(e) => platform.log_warn(&format!("Ignoring entity type: {}", e)),
                    },
                }
            }

            input {
                r#type: "text",
                inputmode: "numeric",
                style: "{input_style}",
                placeholder: "{placeholder}",
                value: "{identification_number}",
                oninput: move |e| form.write().set_identification_number(e.value()),
                onblur: move |_| form.write().blur(Field::IdentificationNumber),
            }
            if let Some(error) = identification_error {
                RequiredText { "{error}" }
            }

            div {
                style: "display: flex; flex-direction: column; align-items: center; \
                        justify-content: space-around; margin: 16px 0; gap: 16px;",

                button {
                    style: "{theme.button_style(picking)}",
                    disabled: picking,
                    onclick: on_select_image,
                    "Select image"
                }

                if let Some(uri) = photo_uri {
                    img {
                        src: "{uri}",
                        alt: "Selected photo",
                        style: "width: 100px; height: 100px; margin: 32px 0; object-fit: cover;",
                    }
                }

                button {
                    style: "{theme.button_style(submitting)}",
                    disabled: submitting,
                    onclick: on_submit,
                    "Submit"
                }
            }
        }
    }
}

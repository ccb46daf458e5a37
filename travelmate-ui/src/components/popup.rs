//! Modal popup host: renders the controller's active dialog.

use leptos::*;

use crate::popup::{ButtonStyle, PopupButton, PopupConfig, PopupController};

/// Mount once at the app root. Renders whatever popup the controller holds:
/// backdrop, modal with optional icon/title/message, and the button row.
/// Clicking the backdrop closes without invoking any action.
#[component]
pub fn PopupHost(controller: PopupController) -> impl IntoView {
    let active = controller.active();
    move || active.get().map(|config| popup_view(controller, config))
}

fn popup_view(controller: PopupController, config: PopupConfig) -> impl IntoView {
    let PopupConfig {
        kind,
        icon,
        title,
        message,
        buttons,
    } = config;

    let buttons = if buttons.is_empty() {
        vec![PopupButton::new("OK", ButtonStyle::Success)]
    } else {
        buttons
    };

    view! {
        // Backdrop
        <div
            id="popup-overlay"
            class="fixed inset-0 z-[100] bg-black/50 backdrop-blur-sm flex items-center justify-center"
            on:click=move |_| controller.close()
        >
            // Dialog
            <div
                class=format!(
                    "popup-modal bg-black/95 border rounded-lg p-4 max-w-sm mx-4 space-y-4 text-center {}",
                    kind.accent_class()
                )
                on:click=|e| e.stop_propagation()
            >
                <div class="popup-header space-y-2">
                    {icon.map(|icon| view! { <div class="popup-icon text-2xl">{icon}</div> })}
                    {title
                        .map(|title| {
                            view! { <h3 class="popup-title text-white text-sm font-medium">{title}</h3> }
                        })}
                    {message
                        .map(|message| {
                            view! { <p class="popup-message text-gray-300 text-sm">{message}</p> }
                        })}
                </div>
                <div class="popup-actions flex gap-2">
                    {buttons.into_iter().map(|button| button_view(controller, button)).collect_view()}
                </div>
            </div>
        </div>
    }
}

fn button_view(controller: PopupController, button: PopupButton) -> impl IntoView {
    let PopupButton {
        label,
        style,
        action,
    } = button;

    view! {
        <button
            class=format!(
                "popup-button flex-1 px-3 py-1.5 rounded-lg text-white text-sm transition-colors {}",
                style.class()
            )
            on:click=move |_| {
                if let Some(action) = action {
                    action.call(());
                }
                controller.close();
            }
        >
            {label}
        </button>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::popup::PopupKind;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    /// Mount a PopupHost into a fresh wrapper and hand back its controller.
    /// The controller is created inside the mounted scope so it lives in the
    /// same reactive runtime as the host.
    fn mount_host() -> (PopupController, web_sys::Element) {
        let doc = document();
        let wrapper = doc.create_element("section").unwrap();
        doc.body().unwrap().append_child(&wrapper).unwrap();

        let slot = Rc::new(Cell::new(None::<PopupController>));
        let slot_in = Rc::clone(&slot);
        mount_to(wrapper.clone().unchecked_into(), move || {
            let controller = PopupController::new();
            slot_in.set(Some(controller));
            view! { <PopupHost controller=controller/> }
        });

        (slot.get().unwrap(), wrapper)
    }

    fn overlay() -> Option<web_sys::Element> {
        document().query_selector("#popup-overlay").unwrap()
    }

    fn overlay_count() -> u32 {
        document()
            .query_selector_all("#popup-overlay")
            .unwrap()
            .length()
    }

    fn click(element: &web_sys::Element) {
        element.clone().unchecked_into::<web_sys::HtmlElement>().click();
    }

    fn titled(title: &str) -> PopupConfig {
        PopupConfig {
            kind: PopupKind::Success,
            icon: None,
            title: Some(title.to_string()),
            message: None,
            buttons: Vec::new(),
        }
    }

    #[wasm_bindgen_test]
    async fn open_while_active_leaves_exactly_one_popup() {
        let (controller, wrapper) = mount_host();

        controller.open(titled("First"));
        TimeoutFuture::new(10).await;
        controller.open(titled("Second"));
        TimeoutFuture::new(10).await;

        assert_eq!(overlay_count(), 1);
        let title = document().query_selector(".popup-title").unwrap().unwrap();
        assert_eq!(title.text_content().as_deref(), Some("Second"));

        wrapper.remove();
    }

    #[wasm_bindgen_test]
    async fn backdrop_click_closes_without_invoking_actions() {
        let (controller, wrapper) = mount_host();

        let invoked = Rc::new(Cell::new(0u32));
        let invoked_in = Rc::clone(&invoked);
        controller.open(PopupConfig {
            kind: PopupKind::Error,
            icon: None,
            title: None,
            message: Some("something happened".to_string()),
            buttons: vec![PopupButton::with_action(
                "OK",
                ButtonStyle::Error,
                Callback::new(move |_| invoked_in.set(invoked_in.get() + 1)),
            )],
        });
        TimeoutFuture::new(10).await;

        click(&overlay().unwrap());
        TimeoutFuture::new(10).await;

        assert!(overlay().is_none());
        assert_eq!(invoked.get(), 0);

        wrapper.remove();
    }

    #[wasm_bindgen_test]
    async fn modal_body_click_does_not_close() {
        let (controller, wrapper) = mount_host();

        controller.open(titled("Stay"));
        TimeoutFuture::new(10).await;

        let modal = document().query_selector(".popup-modal").unwrap().unwrap();
        click(&modal);
        TimeoutFuture::new(10).await;

        assert!(overlay().is_some());

        wrapper.remove();
    }

    #[wasm_bindgen_test]
    async fn button_click_invokes_only_its_action_once_then_closes() {
        let (controller, wrapper) = mount_host();

        let first = Rc::new(Cell::new(0u32));
        let second = Rc::new(Cell::new(0u32));
        let first_in = Rc::clone(&first);
        let second_in = Rc::clone(&second);
        controller.open(PopupConfig {
            kind: PopupKind::Success,
            icon: None,
            title: None,
            message: None,
            buttons: vec![
                PopupButton::with_action(
                    "First",
                    ButtonStyle::Success,
                    Callback::new(move |_| first_in.set(first_in.get() + 1)),
                ),
                PopupButton::with_action(
                    "Second",
                    ButtonStyle::Error,
                    Callback::new(move |_| second_in.set(second_in.get() + 1)),
                ),
            ],
        });
        TimeoutFuture::new(10).await;

        let buttons = document().query_selector_all(".popup-button").unwrap();
        assert_eq!(buttons.length(), 2);
        let second_button = buttons.get(1).unwrap();
        click(second_button.unchecked_ref());
        TimeoutFuture::new(10).await;

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert!(overlay().is_none());

        wrapper.remove();
    }

    #[wasm_bindgen_test]
    async fn empty_button_list_renders_default_ok() {
        let (controller, wrapper) = mount_host();

        controller.open(titled("Default"));
        TimeoutFuture::new(10).await;

        let buttons = document().query_selector_all(".popup-button").unwrap();
        assert_eq!(buttons.length(), 1);
        let ok = buttons.get(0).unwrap();
        assert_eq!(ok.text_content().as_deref(), Some("OK"));

        click(ok.unchecked_ref());
        TimeoutFuture::new(10).await;
        assert!(overlay().is_none());

        wrapper.remove();
    }
}

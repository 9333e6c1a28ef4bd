//! Root widget component and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use saanvi::persistence::HistoryStore;
use saanvi::{WidgetConfig, WidgetController};

use crate::components::{chat_window::ChatWindow, launcher::Launcher};
use crate::util::audio::WebAudioCue;
use crate::util::reply_timer::ReplyTimers;
use crate::util::storage::LocalStorageStore;

/// Root widget component.
///
/// Builds the single [`WidgetController`], replays persisted history into it,
/// and provides it (plus the pending reply timers) to child components.
#[component]
pub fn ChatWidget(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let store: Arc<dyn HistoryStore> = Arc::new(LocalStorageStore::new(config.storage_key.clone()));

    let mut controller = WidgetController::new(config).with_store(store).with_audio(Arc::new(WebAudioCue));
    controller.restore_history();

    let ctl = RwSignal::new(controller);
    provide_context(ctl);
    provide_context(ReplyTimers::new());

    view! {
        <div class="chat-widget">
            <Launcher/>
            <ChatWindow/>
        </div>
    }
}

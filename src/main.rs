//! Tabflow — a debounced active-tab repositioning engine.
//!
//! Entry point: runs a console demo that drives the engine against an
//! in-memory tab host.

use std::sync::Arc;

use tabflow::app::{App, COMMAND_NEXT_TAB};
use tabflow::managers::placement_engine::decide;
use tabflow::platform::memory::MemoryTabHost;
use tabflow::services::options_form::OptionsForm;
use tabflow::services::preference_store::{PreferenceStore, PreferenceStoreTrait};
use tabflow::types::preferences::Preferences;
use tabflow::types::tab::{ActivationEvent, Tab, TAB_GROUP_NONE};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Stderr)
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!(
        "║                 Tabflow v{} — Demo Mode                   ║",
        env!("CARGO_PKG_VERSION")
    );
    println!("║        Debounced active-tab repositioning engine           ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_preferences();
    demo_decision_engine();
    demo_debounced_move().await;
    demo_group_edges().await;
    demo_tab_cycling().await;

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 5 components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn tab(id: i64, group_id: i64, title: &str, url: &str) -> Tab {
    Tab {
        id,
        window_id: 0,
        index: 0,
        group_id,
        pinned: false,
        title: title.to_string(),
        url: url.to_string(),
    }
}

fn demo_preferences() {
    section("Preference Store + Options Form");

    let store = PreferenceStore::new(Some("demo_preferences.json".to_string()));
    let form = OptionsForm::restore(&store);
    println!(
        "  Restored form: delay={}s rightToLeft={} debugMode={}",
        form.delay_move_time, form.right_to_left, form.debug_mode
    );

    let saved = OptionsForm {
        delay_move_time: "0".to_string(),
        right_to_left: false,
        debug_mode: true,
    }
    .save(&store)
    .unwrap();
    println!(
        "  Saved: delay={}s rightToLeft={} debugMode={}",
        saved.delay_move_time, saved.right_to_left, saved.debug_mode
    );

    let rejected = OptionsForm {
        delay_move_time: "-3".to_string(),
        right_to_left: false,
        debug_mode: false,
    }
    .save(&store);
    println!("  Rejected bad delay: {}", rejected.unwrap_err());
    println!("  Store path: {}", store.config_path());
    println!("  ✓ PreferenceStore OK");
    println!();
}

fn demo_decision_engine() {
    section("Decision Engine");

    let window = vec![
        Tab {
            index: 0,
            ..tab(1, TAB_GROUP_NONE, "Home", "https://example.com/")
        },
        Tab {
            index: 1,
            ..tab(2, 5, "Docs", "https://docs.example.com/intro")
        },
        Tab {
            index: 2,
            ..tab(3, 5, "API", "https://docs.example.com/api")
        },
        Tab {
            index: 3,
            ..tab(4, TAB_GROUP_NONE, "News", "https://news.example.com/today")
        },
    ];
    let prefs = Preferences::default();

    let event = ActivationEvent {
        tab_id: 4,
        window_id: 1,
    };
    let decision = decide(&event, &window, Some(&window[3]), &prefs);
    println!("  Ungrouped activation of 'News' -> {:?}", decision);

    let event = ActivationEvent {
        tab_id: 3,
        window_id: 1,
    };
    let decision = decide(&event, &window, Some(&window[2]), &prefs);
    println!("  Grouped activation of 'API'    -> {:?}", decision);

    let pinned = Tab {
        pinned: true,
        ..window[3].clone()
    };
    let decision = decide(&event, &window, Some(&pinned), &prefs);
    println!("  Pinned active tab              -> {:?}", decision);

    let rtl = Preferences {
        right_to_left: true,
        ..Preferences::default()
    };
    let event = ActivationEvent {
        tab_id: 4,
        window_id: 1,
    };
    let decision = decide(&event, &window, Some(&window[3]), &rtl);
    println!("  Same, rightToLeft enabled      -> {:?}", decision);
    println!("  ✓ Decision engine OK");
    println!();
}

async fn demo_debounced_move() {
    section("Debounced Repositioning");

    let host = Arc::new(MemoryTabHost::new());
    host.insert_window(
        1,
        vec![
            tab(1, TAB_GROUP_NONE, "Docs", "https://docs.example.com/"),
            tab(2, TAB_GROUP_NONE, "News", "https://news.example.com/"),
            tab(3, TAB_GROUP_NONE, "Mail", "https://mail.example.com/"),
        ],
    );
    let app = App::new(Arc::clone(&host), Some("demo_preferences.json".to_string()));

    println!("  Window before: {:?}", host.tab_order(1));
    host.set_active(1, 3);
    let handle = app.on_tab_activated(ActivationEvent {
        tab_id: 3,
        window_id: 1,
    });
    let _ = handle.await;
    println!("  Activated 'Mail', window after: {:?}", host.tab_order(1));
    println!("  ✓ Debouncer + executor OK");
    println!();
}

async fn demo_group_edges() {
    section("Group Edge Placement");

    let host = Arc::new(MemoryTabHost::new());
    host.insert_window(
        2,
        vec![
            tab(11, 7, "Issue", "https://issues.example.com/42"),
            tab(12, 7, "Review", "https://review.example.com/7"),
            tab(13, TAB_GROUP_NONE, "Chat", "https://chat.example.com/"),
        ],
    );
    // Simulate the platform evicting a tab from its group on boundary moves
    host.set_evict_on_move(true);
    let app = App::new(Arc::clone(&host), Some("demo_preferences.json".to_string()));

    println!("  Window before: {:?}", host.tab_order(2));
    host.set_active(2, 12);
    let handle = app.on_tab_activated(ActivationEvent {
        tab_id: 12,
        window_id: 2,
    });
    let _ = handle.await;
    let review = host.tab(12).unwrap();
    println!(
        "  Activated 'Review', window after: {:?} (group {} re-asserted)",
        host.tab_order(2),
        review.group_id
    );
    println!("  ✓ Group edge + corrective regroup OK");
    println!();
}

async fn demo_tab_cycling() {
    section("Next-Tab Command");

    let host = Arc::new(MemoryTabHost::new());
    host.insert_window(
        3,
        vec![
            tab(21, TAB_GROUP_NONE, "One", "https://one.example.com/"),
            tab(22, TAB_GROUP_NONE, "Two", "https://two.example.com/"),
            tab(23, TAB_GROUP_NONE, "Three", "https://three.example.com/"),
        ],
    );
    let app = App::new(Arc::clone(&host), Some("demo_preferences.json".to_string()));

    host.set_active(3, 22);
    println!("  Active: {:?}", host.active_tab_id(3));
    app.on_command(COMMAND_NEXT_TAB, 3).await;
    println!("  After 'next': {:?}", host.active_tab_id(3));
    app.on_command(COMMAND_NEXT_TAB, 3).await;
    println!("  After 'next' (wrapped): {:?}", host.active_tab_id(3));
    println!("  ✓ Tab cycler OK");
    println!();
}

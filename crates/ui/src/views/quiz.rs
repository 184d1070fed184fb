use std::time::Duration;

use dioxus::prelude::*;

use client::QuizPhase;
use quiz_core::model::{Direction, StartOptions, DEFAULT_NUM_CHARS};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{map_progress, ProgressVm, QuizIntent, QuizVm, NO_MISSES_MESSAGE};

const RESET_CONFIRM_BODY: &str =
    "Are you sure you want to reset your progress? This will clear all your answers.";
const ALERT_DISMISS_SECS: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AlertSeverity {
    Success,
    Danger,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct AlertVm {
    message: &'static str,
    severity: AlertSeverity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResetState {
    Idle,
    Resetting,
    Error(ViewError),
}

fn alert_class(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Success => "alert alert-success",
        AlertSeverity::Danger => "alert alert-danger",
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();

    let vm = use_signal(QuizVm::new);
    let mut busy = use_signal(|| false);
    let mut start_busy = use_signal(|| false);
    let mut num_chars_input = use_signal(|| DEFAULT_NUM_CHARS.to_string());
    let mut direction_choice = use_signal(Direction::default);
    let progress = use_signal(|| None::<ProgressVm>);
    let alert = use_signal(|| None::<AlertVm>);
    let mut reset_open = use_signal(|| false);
    let mut reset_state = use_signal(|| ResetState::Idle);
    let mut prefilled = use_signal(|| false);

    let show_alert = use_callback(move |next: AlertVm| {
        let mut alert = alert;
        alert.set(Some(next));
        spawn(async move {
            tokio::time::sleep(Duration::from_secs(ALERT_DISMISS_SECS)).await;
            alert.set(None);
        });
    });

    let refresh_progress = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |()| {
            let quiz_loop = quiz_loop.clone();
            let mut progress = progress;
            spawn(async move {
                match quiz_loop.refresh_progress().await {
                    Ok(snapshot) => progress.set(Some(map_progress(&snapshot))),
                    // A stale panel is fine; the next successful refresh
                    // catches up.
                    Err(err) => log::warn!("progress refresh failed: {err}"),
                }
            });
        })
    };

    use_effect(move || {
        refresh_progress.call(());
    });

    let settings_resource = {
        let quiz_loop = quiz_loop.clone();
        use_resource(move || {
            let quiz_loop = quiz_loop.clone();
            async move { quiz_loop.user_settings().await.ok() }
        })
    };
    use_effect(move || {
        if prefilled() {
            return;
        }
        if let Some(Some(settings)) = settings_resource.value().read().as_ref() {
            prefilled.set(true);
            num_chars_input.set(settings.saved_num_chars.to_string());
        }
    });

    let dispatch = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |intent: QuizIntent| {
            let quiz_loop = quiz_loop.clone();
            let mut vm = vm;
            let mut busy = busy;
            match intent {
                QuizIntent::ToggleReveal => {
                    let mut current = vm();
                    current.toggle_reveal();
                    vm.set(current);
                }
                QuizIntent::Answer(is_correct) => {
                    if busy() {
                        return;
                    }
                    busy.set(true);
                    spawn(async move {
                        let mut vm_value = vm();
                        let mut progress = progress;
                        let result = vm_value
                            .answer_current(&quiz_loop, is_correct, |snapshot| {
                                progress.set(Some(map_progress(&snapshot)));
                            })
                            .await;
                        // Put the session back before reporting so the panels
                        // always match the controller state.
                        vm.set(vm_value);
                        busy.set(false);
                        if let Err(err) = result {
                            show_alert.call(AlertVm {
                                message: err.message(),
                                severity: AlertSeverity::Danger,
                            });
                        }
                    });
                }
                QuizIntent::Undo => {
                    if busy() {
                        return;
                    }
                    busy.set(true);
                    spawn(async move {
                        let mut vm_value = vm();
                        let result = vm_value.undo(&quiz_loop).await;
                        vm.set(vm_value);
                        busy.set(false);
                        match result {
                            Ok(true) => refresh_progress.call(()),
                            Ok(false) => {}
                            Err(err) => show_alert.call(AlertVm {
                                message: err.message(),
                                severity: AlertSeverity::Danger,
                            }),
                        }
                    });
                }
            }
        })
    };

    let on_start = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |()| {
            if start_busy() {
                return;
            }
            let parsed = num_chars_input()
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(|count| StartOptions::new(count, direction_choice()).ok());
            let Some(options) = parsed else {
                show_alert.call(AlertVm {
                    message: "Enter how many characters to practice",
                    severity: AlertSeverity::Danger,
                });
                return;
            };
            let quiz_loop = quiz_loop.clone();
            let mut vm = vm;
            let mut start_busy = start_busy;
            start_busy.set(true);
            spawn(async move {
                let mut vm_value = vm();
                let result = vm_value.start(&quiz_loop, options).await;
                vm.set(vm_value);
                start_busy.set(false);
                match result {
                    Ok(_) => refresh_progress.call(()),
                    Err(err) => show_alert.call(AlertVm {
                        message: err.message(),
                        severity: AlertSeverity::Danger,
                    }),
                }
            });
        })
    };

    let on_confirm_reset = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |()| {
            if reset_state() == ResetState::Resetting {
                return;
            }
            let quiz_loop = quiz_loop.clone();
            let mut vm = vm;
            let mut reset_state = reset_state;
            let mut reset_open = reset_open;
            reset_state.set(ResetState::Resetting);
            spawn(async move {
                let mut vm_value = vm();
                match vm_value.reset(&quiz_loop).await {
                    Ok(()) => {
                        vm.set(vm_value);
                        reset_state.set(ResetState::Idle);
                        reset_open.set(false);
                        show_alert.call(AlertVm {
                            message: "Progress has been reset!",
                            severity: AlertSeverity::Success,
                        });
                        refresh_progress.call(());
                    }
                    Err(err) => {
                        // The session is untouched on failure; keep the modal
                        // open with the error.
                        reset_state.set(ResetState::Error(err));
                    }
                }
            });
        })
    };

    let vm_value = vm();
    let progress_value = progress();
    let alert_value = alert();
    let answer_enabled = vm_value.controls_enabled() && !busy();
    let undo_enabled = vm_value.can_undo() && !busy();

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "Kanji Quiz" }
                p { class: "view-subtitle", "Flashcard practice against your study list." }
            }
            if let Some(current) = alert_value {
                div { class: "{alert_class(current.severity)}",
                    span { "{current.message}" }
                    button {
                        class: "alert-close",
                        r#type: "button",
                        onclick: move |_| {
                            let mut alert = alert;
                            alert.set(None);
                        },
                        "×"
                    }
                }
            }
            div { class: "quiz-layout",
                section { class: "quiz-main",
                    match vm_value.phase() {
                        QuizPhase::Setup => rsx! {
                            div { class: "quiz-setup",
                                h3 { "Start a Quiz" }
                                label { class: "setup-label", r#for: "num-chars", "Number of characters" }
                                input {
                                    id: "num-chars",
                                    class: "setup-input",
                                    r#type: "number",
                                    min: "1",
                                    value: "{num_chars_input()}",
                                    oninput: move |evt| num_chars_input.set(evt.value()),
                                }
                                fieldset { class: "setup-direction",
                                    legend { "Direction" }
                                    label { class: "setup-radio",
                                        input {
                                            r#type: "radio",
                                            name: "direction",
                                            checked: direction_choice() == Direction::JapaneseToEnglish,
                                            onchange: move |_| direction_choice.set(Direction::JapaneseToEnglish),
                                        }
                                        "Japanese → English"
                                    }
                                    label { class: "setup-radio",
                                        input {
                                            r#type: "radio",
                                            name: "direction",
                                            checked: direction_choice() == Direction::EnglishToJapanese,
                                            onchange: move |_| direction_choice.set(Direction::EnglishToJapanese),
                                        }
                                        "English → Japanese"
                                    }
                                }
                                button {
                                    class: "btn btn-primary start-quiz",
                                    r#type: "button",
                                    disabled: start_busy(),
                                    onclick: move |_| on_start.call(()),
                                    if start_busy() { "Starting..." } else { "Start Quiz" }
                                }
                            }
                        },
                        QuizPhase::InQuiz => rsx! {
                            div { class: "quiz-card",
                                div { class: "character-display",
                                    if let Some(prompt) = vm_value.prompt_text() {
                                        div { class: "character-prompt", "{prompt}" }
                                    }
                                    if let Some(number) = vm_value.char_number() {
                                        small { class: "character-number", "(#{number})" }
                                    }
                                }
                                button {
                                    class: "btn btn-secondary reveal-toggle",
                                    r#type: "button",
                                    onclick: move |_| dispatch.call(QuizIntent::ToggleReveal),
                                    if vm_value.reveal_open() { "Hide Answer" } else { "Show Answer" }
                                }
                                if vm_value.reveal_open() {
                                    if let Some(answer) = vm_value.answer_text() {
                                        div { class: "answer-reveal", "{answer}" }
                                    }
                                }
                                div { class: "answer-actions",
                                    button {
                                        class: "btn btn-correct",
                                        r#type: "button",
                                        disabled: !answer_enabled,
                                        onclick: move |_| dispatch.call(QuizIntent::Answer(true)),
                                        "Correct"
                                    }
                                    button {
                                        class: "btn btn-incorrect",
                                        r#type: "button",
                                        disabled: !answer_enabled,
                                        onclick: move |_| dispatch.call(QuizIntent::Answer(false)),
                                        "Incorrect"
                                    }
                                }
                                button {
                                    class: "btn btn-ghost undo-answer",
                                    r#type: "button",
                                    disabled: !undo_enabled,
                                    onclick: move |_| dispatch.call(QuizIntent::Undo),
                                    "Undo last answer"
                                }
                            }
                        },
                        QuizPhase::Finished => rsx! {
                            div { class: "quiz-finished",
                                h3 { "No more characters!" }
                                p { "You have answered every character in this list. Reset your progress to run it again." }
                                if undo_enabled {
                                    button {
                                        class: "btn btn-ghost undo-answer",
                                        r#type: "button",
                                        onclick: move |_| dispatch.call(QuizIntent::Undo),
                                        "Undo last answer"
                                    }
                                }
                            }
                        },
                    }
                }
                aside { class: "progress-panel",
                    h3 { "Progress" }
                    match progress_value {
                        Some(progress) => rsx! {
                            div { class: "progress-track",
                                div { class: "progress-bar", style: "width: {progress.bar_width}" }
                            }
                            p { class: "progress-text", "{progress.progress_label}" }
                            p { class: "score-text", "Score: {progress.score_label}" }
                            h4 { "Incorrect answers" }
                            if progress.missed.is_empty() {
                                p { class: "missed-empty",
                                    em { "{NO_MISSES_MESSAGE}" }
                                }
                            } else {
                                ul { class: "missed-list",
                                    for item in progress.missed.iter() {
                                        li { class: "missed-item",
                                            span { class: "missed-character", "{item.character}" }
                                            ": {item.meaning}"
                                        }
                                    }
                                }
                            }
                        },
                        None => rsx! {
                            p { class: "progress-text", "Loading progress..." }
                        },
                    }
                    button {
                        class: "btn btn-danger reset-progress",
                        r#type: "button",
                        onclick: move |_| {
                            reset_state.set(ResetState::Idle);
                            reset_open.set(true);
                        },
                        "Reset Progress"
                    }
                }
            }
            if reset_open() {
                div {
                    class: "quiz-modal-overlay",
                    onclick: move |_| {
                        reset_open.set(false);
                        reset_state.set(ResetState::Idle);
                    },
                    div {
                        class: "quiz-modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { class: "quiz-modal-title", "Reset progress?" }
                        p { class: "quiz-modal-body", "{RESET_CONFIRM_BODY}" }
                        if let ResetState::Error(err) = reset_state() {
                            p { class: "quiz-modal-error", "{err.message()}" }
                        }
                        div { class: "quiz-modal-actions",
                            button {
                                class: "btn quiz-modal-cancel",
                                r#type: "button",
                                onclick: move |_| {
                                    reset_open.set(false);
                                    reset_state.set(ResetState::Idle);
                                },
                                "Cancel"
                            }
                            button {
                                class: "btn btn-danger quiz-modal-confirm",
                                r#type: "button",
                                disabled: reset_state() == ResetState::Resetting,
                                onclick: move |_| on_confirm_reset.call(()),
                                "Reset"
                            }
                        }
                    }
                }
            }
        }
    }
}

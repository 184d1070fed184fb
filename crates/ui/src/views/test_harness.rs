use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use client::{ApiError, CharacterFetch, QuizApi, QuizLoopService, UserSettings};
use quiz_core::model::{DirectionStats, ProgressSnapshot, SessionStats, StartOptions};

use crate::context::{build_app_context, UiApp};
use crate::views::{QuizView, StatsView};

/// Serves canned responses so views can render without a server.
#[derive(Default)]
pub struct StubQuizApi {
    pub fail_progress: bool,
    pub fail_stats: bool,
}

fn stub_error() -> ApiError {
    ApiError::Rejected("stubbed failure".into())
}

#[async_trait]
impl QuizApi for StubQuizApi {
    async fn start_game(&self, _options: StartOptions) -> Result<CharacterFetch, ApiError> {
        Ok(CharacterFetch::NoMoreCharacters)
    }

    async fn next_character(&self) -> Result<CharacterFetch, ApiError> {
        Ok(CharacterFetch::NoMoreCharacters)
    }

    async fn submit_answer(&self, _character: &str, _is_correct: bool) -> Result<(), ApiError> {
        Ok(())
    }

    async fn progress(&self) -> Result<ProgressSnapshot, ApiError> {
        if self.fail_progress {
            return Err(stub_error());
        }
        Ok(ProgressSnapshot {
            shown_characters: 3,
            total_characters: 10,
            progress_percentage: 30.0,
            score_percentage: 66.67,
            incorrect: Vec::new(),
        })
    }

    async fn reset_progress(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn undo_answer(&self, _character: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn user_settings(&self) -> Result<UserSettings, ApiError> {
        Ok(UserSettings {
            username: "tester".into(),
            saved_num_chars: 25,
        })
    }

    async fn stats(&self) -> Result<SessionStats, ApiError> {
        if self.fail_stats {
            return Err(stub_error());
        }
        Ok(SessionStats {
            total_answered: 20,
            total_correct: 15,
            overall_percentage: 75.0,
            avg_correct_time_ms: 1200,
            avg_incorrect_time_ms: 3400,
            fastest_time_ms: 600,
            slowest_time_ms: 9000,
            jp_to_en: DirectionStats {
                total: 12,
                correct: 10,
                percentage: 83.3,
            },
            en_to_jp: DirectionStats {
                total: 8,
                correct: 5,
                percentage: 62.5,
            },
            recent: Vec::new(),
        })
    }
}

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Quiz,
    Stats,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Stats => rsx! { StatsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, api: Arc<StubQuizApi>) -> ViewHarness {
    let quiz_loop = Arc::new(
        QuizLoopService::new(api as Arc<dyn QuizApi>).with_advance_delay(Duration::ZERO),
    );
    let app = Arc::new(TestApp { quiz_loop });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom }
}

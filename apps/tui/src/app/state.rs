use std::cell::Cell;
use std::sync::Arc;
use std::time::{Duration, Instant};

use throbber_widgets_tui::ThrobberState;

use crate::api::AccidentSource;
use crate::app::actions::FetchActions;
use crate::app::report::{FetchOutcome, ReportState, ReportView, RequestSequence};
use crate::app::router::{Route, Router};
use crate::app::session::{Session, SignInForm};
use crate::domain::YearSelection;

const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub session: Session,
    pub sign_in_form: SignInForm,
    pub router: Router,
    pub report: Option<ReportView>,
    pub start_year: YearSelection,
    pub show_help: bool,
    /// Text of the "go to path" prompt while it is open.
    pub path_prompt: Option<String>,
    pub news_scroll: u16,
    /// Last scrollable line of the article, written back by the renderer
    /// once it knows the wrapped height.
    pub news_scroll_limit: Cell<u16>,
    pub status_message: String,
    pub throbber: ThrobberState,
    pub last_frame: Instant,
    pub actions: FetchActions,
    sequence: RequestSequence,
}

impl App {
    pub fn new(
        source: Arc<dyn AccidentSource>,
        start_year: YearSelection,
        start_route: &str,
    ) -> Self {
        let mut app = Self {
            running: true,
            session: Session::default(),
            sign_in_form: SignInForm::default(),
            router: Router::new(start_route),
            report: None,
            start_year,
            show_help: false,
            path_prompt: None,
            news_scroll: 0,
            news_scroll_limit: Cell::new(0),
            status_message: String::new(),
            throbber: ThrobberState::default(),
            last_frame: Instant::now(),
            actions: FetchActions::new(source),
            sequence: RequestSequence::default(),
        };
        app.sync_view();
        app
    }

    pub fn route(&self) -> &Route {
        self.router.current()
    }

    /// True when the current route is gated and nobody is signed in, i.e.
    /// the sign-in form owns the content area.
    pub fn sign_in_required(&self) -> bool {
        self.route().is_gated() && !self.session.is_signed_in()
    }

    /// Mounts the report view when the home route is visible to a signed-in
    /// user and unmounts it otherwise. Unmounting drops the data and aborts
    /// any request still in flight.
    pub fn sync_view(&mut self) {
        let should_mount = *self.route() == Route::Home && self.session.is_signed_in();

        match (should_mount, self.report.is_some()) {
            (true, false) => {
                let (view, ticket) = ReportView::mount(self.start_year, &mut self.sequence);
                log::debug!("report view mounted at {}", ticket.year);
                self.report = Some(view);
                self.actions.dispatch(ticket);
            }
            (false, true) => {
                log::debug!("report view unmounted");
                self.report = None;
                self.actions.cancel();
            }
            _ => {}
        }
    }

    pub fn navigate(&mut self, path: &str) {
        if self.router.navigate(path) {
            self.news_scroll = 0;
            self.status_message.clear();
            self.sync_view();
        }
    }

    pub fn go_back(&mut self) {
        if self.router.back() {
            self.news_scroll = 0;
            self.sync_view();
        }
    }

    /// Submits the sign-in form. An empty field never reaches the session.
    pub fn submit_sign_in(&mut self) {
        match self.sign_in_form.submit() {
            Some(user) => {
                self.session.sign_in(user);
                self.status_message.clear();
                self.sync_view();
            }
            None => {
                self.status_message = "Please fill out this field.".to_string();
            }
        }
    }

    pub fn sign_out(&mut self) {
        self.session.sign_out();
        self.sync_view();
    }

    pub fn next_year(&mut self) {
        if let Some(report) = self.report.as_mut() {
            let ticket = report.next_year(&mut self.sequence);
            self.actions.dispatch(ticket);
        }
    }

    pub fn previous_year(&mut self) {
        if let Some(report) = self.report.as_mut() {
            let ticket = report.previous_year(&mut self.sequence);
            self.actions.dispatch(ticket);
        }
    }

    /// Applies every outcome that has arrived since the last frame.
    pub fn apply_fetch_outcomes(&mut self) {
        while let Some(outcome) = self.actions.try_next() {
            self.apply_outcome(outcome);
        }
    }

    /// Waits until the mounted report leaves the loading state. Returns
    /// immediately when nothing is mounted.
    pub async fn settle_report(&mut self) {
        while matches!(
            self.report.as_ref().map(ReportView::state),
            Some(ReportState::Loading)
        ) {
            match self.actions.next().await {
                Some(outcome) => self.apply_outcome(outcome),
                None => break,
            }
        }
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match self.report.as_mut() {
            Some(report) => {
                report.resolve(outcome);
            }
            None => log::debug!("dropping result for unmounted report view"),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_frame) >= SPINNER_INTERVAL {
            self.last_frame = now;
            self.throbber.calc_next();
        }
    }
}

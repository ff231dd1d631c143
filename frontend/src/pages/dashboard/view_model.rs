use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use leptos::*;

use crate::{
    api::{ApiClient, School, UserResponse},
    pages::dashboard::{
        model::{DashboardState, DayTracker, FilterState, ProfileState, StatusMessage},
        polling, repository,
        utils::{checkins_csv, export_file_name, DateShortcut},
    },
    state::auth::{use_api_client, use_auth},
    utils::{
        download::{self, NOTHING_TO_EXPORT},
        time::{now_in_app_tz, today_in_app_tz},
    },
};

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub filters: RwSignal<FilterState>,
    pub state: RwSignal<DashboardState>,
    pub classes: RwSignal<Vec<String>>,
    pub schools: RwSignal<Vec<School>>,
    pub now: RwSignal<DateTime<Tz>>,
    pub user: Signal<Option<UserResponse>>,
    pub profile: RwSignal<Option<ProfileState>>,
    api: StoredValue<ApiClient>,
    day_tracker: StoredValue<DayTracker>,
    status_seq: StoredValue<u64>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_api_client();
        let (auth, _) = use_auth();
        let today = today_in_app_tz();
        Self {
            filters: create_rw_signal(FilterState::new(today)),
            state: create_rw_signal(DashboardState::default()),
            classes: create_rw_signal(Vec::new()),
            schools: create_rw_signal(Vec::new()),
            now: create_rw_signal(now_in_app_tz()),
            user: Signal::derive(move || auth.get().user),
            profile: create_rw_signal(None),
            api: store_value(api),
            day_tracker: store_value(DayTracker::new(today)),
            status_seq: store_value(0),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .get()
            .as_ref()
            .is_some_and(UserResponse::is_administrator)
    }

    pub fn today(&self) -> NaiveDate {
        self.now.get().date_naive()
    }

    /// Initial load plus the page timers.
    pub fn start(&self) {
        let vm = *self;
        vm.refresh();
        vm.load_options();
        polling::every(polling::REFRESH_INTERVAL_MS, move || vm.refresh());
        polling::every(polling::CLOCK_INTERVAL_MS, move || vm.now.set(now_in_app_tz()));
        polling::every(polling::DAY_CHECK_INTERVAL_MS, move || vm.check_day());
    }

    pub fn refresh(&self) {
        let vm = *self;
        let query = self.filters.get_untracked().query();
        let api = self.api.get_value();
        spawn_local(async move {
            let outcome = repository::refresh(&api, &query).await;
            let now = now_in_app_tz().time();
            let mut failed = false;
            vm.state.update(|state| failed = !state.apply(outcome, now) && state.status.is_some());
            if failed {
                vm.schedule_dismiss();
            }
        });
    }

    fn load_options(&self) {
        let vm = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            vm.classes.set(repository::load_classes(&api).await);
        });
        let api = self.api.get_value();
        // Only administrators see other schools; the user may still be loading.
        create_effect(move |loaded: Option<bool>| {
            if loaded == Some(true) {
                return true;
            }
            let is_admin = vm.is_admin();
            if is_admin {
                let api = api.clone();
                spawn_local(async move {
                    vm.schools.set(repository::load_schools(&api).await);
                });
            }
            is_admin
        });
    }

    fn check_day(&self) {
        let today = today_in_app_tz();
        let selected = self.filters.get_untracked().date;
        let advance = self
            .day_tracker
            .try_update_value(|tracker| tracker.observe(today, selected))
            .flatten();
        if let Some(date) = advance {
            log::info!("Day changed, following the selection to {}", date);
            self.filters.update(|f| f.date = date);
            self.refresh();
        }
    }

    pub fn set_date(&self, date: NaiveDate) {
        self.filters.update(|f| f.date = date);
        self.refresh();
    }

    pub fn select_shortcut(&self, shortcut: DateShortcut) {
        self.set_date(shortcut.date(today_in_app_tz()));
    }

    pub fn set_class(&self, class_name: String) {
        self.filters
            .update(|f| f.class_name = Some(class_name).filter(|c| !c.is_empty()));
        self.refresh();
    }

    pub fn set_school(&self, raw: String) {
        self.filters.update(|f| f.school_id = raw.parse().ok());
        self.refresh();
    }

    /// Search only re-renders; it never refetches.
    pub fn set_search(&self, term: String) {
        self.filters.update(|f| f.search = term);
    }

    pub fn show_profile(&self, student_id: i64) {
        self.profile.set(Some(ProfileState::Loading(student_id)));
        let profile = self.profile;
        let api = self.api.get_value();
        spawn_local(async move {
            let result = repository::load_student(&api, student_id).await;
            profile.update(|current| ProfileState::resolve(current, student_id, result));
        });
    }

    pub fn show_status(&self, message: StatusMessage) {
        self.state.update(|s| s.status = Some(message));
        self.schedule_dismiss();
    }

    fn schedule_dismiss(&self) {
        let state = self.state;
        let seq = self.status_seq;
        let mine = seq.try_update_value(|n| {
            *n += 1;
            *n
        });
        polling::after(polling::STATUS_DISMISS_MS, move || {
            if seq.try_get_value() == mine {
                state.update(|s| s.status = None);
            }
        });
    }

    pub fn export_csv(&self) {
        let date = self.filters.get_untracked().date;
        let checkins = self
            .state
            .with_untracked(|s| s.snapshot.as_ref().map(|snap| snap.checkins.clone()))
            .unwrap_or_default();
        if checkins.is_empty() {
            self.show_status(StatusMessage::info(NOTHING_TO_EXPORT));
            return;
        }
        let result = checkins_csv(&checkins)
            .and_then(|csv| download::save_csv(&export_file_name(date), &csv));
        if let Err(err) = result {
            log::error!("CSV export failed: {}", err);
            self.show_status(StatusMessage::error(format!("No se pudo exportar: {}", err)));
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

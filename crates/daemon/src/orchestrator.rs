// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Lifecycle Manager (C7): the orchestrator that wires the registry,
//! router, prelauncher, memory checker, foreground reconciler, and
//! publisher together and owns the one piece of mutable state all of them
//! share (§4.7). Every public entry point here is the sole writer of
//! `lifeStatus` — nothing outside `set_app_life_status` ever assigns it.

use crate::foreground::{self, ForegroundSnapshot};
use crate::memory_checker::{MemoryChecker, MemoryManager};
use crate::prelauncher::{PackageLookup, Prelauncher};
use crate::protocol::Reply;
use crate::publisher::{LifecycleEventKind, Publisher};
use crate::registry::Registry;
use async_trait::async_trait;
use parking_lot::Mutex;
use samadapters::{BackendError, NativeChannel, NotificationAdapter, RuntimeBackendAdapter};
use samcore::app_item::{CloseItem, LaunchItem, LaunchTask, LoadingEntry, Stage, Uid};
use samcore::app_item::{APP_LAUNCH_ERR_GENERAL, APP_LAUNCH_ERR_NOT_EXIST};
use samcore::router::{life_status_from_runtime_status, route_policy, Candidate, RouteAction, RouteLog};
use samcore::settings::{is_keep_alive_exempt, CONTAINER_APP_ID, INPUT_COMMON_APP_ID, SAM_INTERNAL_ID};
use samcore::timer::TimerId;
use samcore::types::{AppType, LifeStatus, NativeInterfaceVersion, RuntimeStatus};
use samcore::{Clock, Event, OrchestratorError, Settings};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;

/// Runs the fallback launch when no fullscreen app remains and none is
/// mid-launch (§4.7 last-app machinery). Implemented outside this crate by
/// whatever knows which app is "last."
#[async_trait]
pub trait LastAppHandler: Send + Sync {
    async fn run_last_app(&self);
}

struct InFlightLaunch {
    app_id: String,
    cancel: CancellationToken,
    start_time_ms: u64,
    automatic: bool,
}

#[derive(Default)]
struct LastAppGuard {
    last_launching_apps: HashSet<String>,
    timer: Option<(TimerId, String, u64)>,
}

#[derive(Default)]
struct OrchestratorState {
    registry: Registry,
    close_reasons: HashMap<String, String>,
    loading: Vec<LoadingEntry>,
    last_app: LastAppGuard,
    in_flight: HashMap<Uid, InFlightLaunch>,
}

/// The orchestrator (§4.7). Generic over the three collaborators that
/// genuinely benefit from monomorphization (backend, notifier, clock);
/// everything else it needs is a single shared instance behind a trait
/// object, since there is only ever one app catalog, one settings source,
/// and one last-app policy per running daemon.
pub struct Orchestrator<B, N, C> {
    state: Mutex<OrchestratorState>,
    backend: B,
    notifier: N,
    clock: C,
    settings: Arc<dyn Settings>,
    packages: Arc<dyn PackageLookup>,
    last_app_handler: Arc<dyn LastAppHandler>,
    publisher: Publisher,
    prelauncher: Prelauncher<Arc<dyn PackageLookup>>,
    memory_checker: MemoryChecker<Arc<dyn MemoryManager>>,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: Mutex<Option<mpsc::UnboundedReceiver<Event>>>,
}

impl<B, N, C> Orchestrator<B, N, C>
where
    B: RuntimeBackendAdapter + 'static,
    N: NotificationAdapter + 'static,
    C: Clock + 'static,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        backend: B,
        notifier: N,
        clock: C,
        settings: Arc<dyn Settings>,
        packages: Arc<dyn PackageLookup>,
        memory_manager: Arc<dyn MemoryManager>,
        last_app_handler: Arc<dyn LastAppHandler>,
    ) -> Arc<Self> {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Arc::new(Self {
            state: Mutex::new(OrchestratorState::default()),
            backend,
            notifier,
            clock,
            settings,
            prelauncher: Prelauncher::new(Arc::clone(&packages)),
            packages,
            last_app_handler,
            publisher: Publisher::new(),
            memory_checker: MemoryChecker::new(memory_manager),
            events_tx,
            events_rx: Mutex::new(Some(events_rx)),
        })
    }

    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    /// Drive the central event loop. Runs until every clone of `events_tx`
    /// is dropped; spawn this once, for the orchestrator's lifetime.
    pub async fn run(self: Arc<Self>) {
        let Some(mut rx) = self.events_rx.lock().take() else {
            tracing::error!("run() called more than once; ignoring");
            return;
        };
        while let Some(event) = rx.recv().await {
            self.handle_event(event).await;
        }
    }

    async fn handle_event(self: &Arc<Self>, event: Event) {
        match event {
            Event::RunningAppAdded { app_id, pid, web_process_id } => {
                {
                    let mut state = self.state.lock();
                    let info = state.registry.get_or_create(&app_id);
                    info.pid = pid;
                    info.web_process_id = web_process_id;
                }
                self.publish_snapshot();
            }
            Event::RunningAppRemoved { app_id } => {
                {
                    self.state.lock().registry.remove(&app_id);
                }
                self.publish_snapshot();
            }
            Event::RuntimeStatusChanged { app_id, uid: _, status } => {
                let is_foreground = {
                    let mut state = self.state.lock();
                    state.registry.get_or_create(&app_id).runtime_status = status;
                    state.registry.foreground_app_ids().contains(&app_id)
                };
                let candidate = life_status_from_runtime_status(status, is_foreground);
                self.set_app_life_status(&app_id, candidate, None, false).await;
                if status == RuntimeStatus::Stopped {
                    self.clear_launching_and_loading_items_by_app_id(&app_id).await;
                }
            }
            Event::PrelaunchingDone { uid } => tracing::debug!(%uid, "prelaunching done"),
            Event::MemoryCheckingStart { uid } => tracing::debug!(%uid, "memory checking start"),
            Event::MemoryCheckingDone { uid } => tracing::debug!(%uid, "memory checking done"),
            Event::LaunchingDone { uid } => tracing::debug!(%uid, "launching done"),
            Event::ForegroundInfoChanged { info, reason } => {
                self.reconcile_foreground(ForegroundSnapshot { info, reason }).await;
            }
        }
        self.check_last_loading_app_timer().await;
    }

    fn publish_snapshot(&self) {
        let state = self.state.lock();
        self.publisher.publish_running(&state.registry);
        self.publisher.publish_dev_running(&state.registry);
    }

    // ---- launch --------------------------------------------------------

    /// Launch `task` (§4.3, §4.7). Spawns one pipeline task for the new
    /// uid and waits for it to reach `finishLaunching`; the caller's
    /// `await` does not block the central event loop, which keeps running
    /// concurrently on its own task.
    pub async fn launch(self: &Arc<Self>, task: LaunchTask) -> Reply {
        let now_ms = self.clock.epoch_ms();
        let item = match LaunchItem::create(task, now_ms) {
            Ok(item) => item,
            Err(_) => return Reply::err(Some(APP_LAUNCH_ERR_NOT_EXIST), "not exist"),
        };

        let uid = item.uid;
        let cancel = CancellationToken::new();
        {
            let mut state = self.state.lock();
            state.in_flight.insert(
                uid,
                InFlightLaunch {
                    app_id: item.app_id.clone(),
                    cancel: cancel.clone(),
                    start_time_ms: item.launch_start_time_ms,
                    automatic: item.is_automatic(),
                },
            );
        }

        let (reply_tx, reply_rx) = oneshot::channel();
        let this = Arc::clone(self);
        tokio::spawn(async move { this.run_pipeline(item, cancel, reply_tx).await });
        reply_rx.await.unwrap_or_else(|_| Reply::err(None, "internal error"))
    }

    async fn run_pipeline(self: Arc<Self>, mut item: LaunchItem, cancel: CancellationToken, reply_tx: oneshot::Sender<Reply>) {
        let uid = item.uid;

        item = tokio::select! {
            _ = cancel.cancelled() => { item.cancel(); item }
            it = self.prelauncher.run(item) => it,
        };
        let _ = self.events_tx.send(Event::PrelaunchingDone { uid });

        if !item.has_error() {
            item.stage = Stage::MemoryCheck;
            let _ = self.events_tx.send(Event::MemoryCheckingStart { uid });
            item = tokio::select! {
                _ = cancel.cancelled() => { item.cancel(); item }
                it = self.memory_checker.run(item) => it,
            };
            let _ = self.events_tx.send(Event::MemoryCheckingDone { uid });
        }

        if !item.has_error() {
            item.stage = Stage::Launch;
            let splash_requested = item.requested_splash_or_spinner();
            self.set_app_life_status(&item.app_id, Candidate::Launching, item.reason.as_deref(), splash_requested).await;

            let launch_result: Result<(), BackendError> = tokio::select! {
                _ = cancel.cancelled() => Err(BackendError::Unavailable("cancelled".to_string())),
                r = self.backend.launch(item.clone(), self.events_tx.clone()) => r,
            };
            if let Err(err) = launch_result {
                item.set_error(APP_LAUNCH_ERR_GENERAL, err.to_string());
            }
        }
        item.stage = Stage::Done;

        let _ = self.events_tx.send(Event::LaunchingDone { uid });
        self.finish_launching(item, reply_tx).await;
    }

    async fn finish_launching(self: &Arc<Self>, item: LaunchItem, reply_tx: oneshot::Sender<Reply>) {
        let reply = if item.has_error() {
            Reply::err(item.error_code, item.error_text.clone().unwrap_or_default())
        } else {
            Reply::ok(item.app_id.clone())
        };
        let _ = reply_tx.send(reply);

        let was_tracked_as_last = {
            let mut state = self.state.lock();
            state.in_flight.remove(&item.uid);
            state.last_app.last_launching_apps.remove(&item.app_id)
        };

        if item.has_error() {
            if item.stage == Stage::Done && item.error_code == Some(APP_LAUNCH_ERR_GENERAL) {
                self.set_app_life_status(&item.app_id, Candidate::Stop, None, false).await;
            }
            if was_tracked_as_last {
                self.trigger_to_launch_last_app().await;
            }
        }
    }

    // ---- pause / close ---------------------------------------------------

    pub async fn pause(self: &Arc<Self>, app_id: &str, params: Value) -> Reply {
        self.pause_app(app_id, params, true).await
    }

    async fn pause_app(self: &Arc<Self>, app_id: &str, params: Value, report_event: bool) -> Reply {
        let runtime_status = self.state.lock().registry.get(app_id).map(|info| info.runtime_status);
        if !matches!(runtime_status, Some(RuntimeStatus::Running) | Some(RuntimeStatus::Registered)) {
            return Reply::err(None, OrchestratorError::NotRunning.to_string());
        }
        if let Err(err) = self.backend.pause(app_id, params, report_event, self.events_tx.clone()).await {
            return Reply::err(None, err.to_string());
        }
        if report_event {
            self.set_app_life_status(app_id, Candidate::Pausing, None, false).await;
        }
        Reply::ok(app_id)
    }

    /// Close one app (§4.7). `let_app_handle` converts this into a pause
    /// rather than a close, mirroring `closeByAppId`'s keep-alive path but
    /// requested explicitly by the caller instead of derived from settings.
    pub async fn close(
        self: &Arc<Self>,
        app_id: &str,
        pid: Option<String>,
        caller: &str,
        reason: Option<String>,
        let_app_handle: bool,
    ) -> Reply {
        if let_app_handle {
            return self.pause_app(app_id, Value::Null, false).await;
        }
        self.close_by_app_id(app_id, pid, caller, reason).await
    }

    async fn close_by_app_id(
        self: &Arc<Self>,
        app_id: &str,
        pid: Option<String>,
        caller: &str,
        reason: Option<String>,
    ) -> Reply {
        if self.settings.is_keep_alive_app(app_id) && !is_keep_alive_exempt(caller, reason.as_deref()) {
            return self.pause_app(app_id, Value::Null, true).await;
        }

        let close_reason = self.settings.get_close_reason(caller, reason.as_deref());
        if let Some(reason) = &close_reason {
            let mut state = self.state.lock();
            state.close_reasons.entry(app_id.to_string()).or_insert_with(|| reason.clone());
        }

        self.set_app_life_status(app_id, Candidate::Closing, None, false).await;

        let mut close_item = CloseItem::new(app_id, caller);
        if let Some(reason) = close_reason {
            close_item = close_item.reason(reason);
        }
        if let Some(pid) = pid {
            close_item = close_item.pid(pid);
        }
        if let Err(err) = self.backend.close(close_item, self.events_tx.clone()).await {
            return Reply::err(None, err.to_string());
        }
        Reply::ok(app_id)
    }

    /// Close every running app (§4.7 `closeAllApps`). Background apps
    /// close immediately; the fullscreen owner (if any) closes last,
    /// after a best-effort ~500ms ordering delay that lets backend-side
    /// close animations for the background apps settle first. That delay
    /// is not a correctness guarantee — a concurrent `launch` can still
    /// race it.
    pub async fn close_all(self: &Arc<Self>, caller: &str, reason: Option<String>) {
        let (fullscreen_owner, background_apps) = {
            let state = self.state.lock();
            let owner = state.registry.fullscreen_owner().map(str::to_string);
            let others: Vec<String> = state
                .registry
                .list_all()
                .map(|info| info.app_id.clone())
                .filter(|app_id| Some(app_id.as_str()) != owner.as_deref())
                .collect();
            (owner, others)
        };

        let mut closed_any = false;
        for app_id in background_apps {
            let _ = self.close_by_app_id(&app_id, None, caller, reason.clone()).await;
            closed_any = true;
        }

        if let Some(owner) = fullscreen_owner {
            let this = Arc::clone(self);
            let caller = caller.to_string();
            tokio::spawn(async move {
                if closed_any {
                    tokio::time::sleep(std::time::Duration::from_millis(500)).await;
                }
                let _ = this.close_by_app_id(&owner, None, &caller, reason).await;
            });
        }
    }

    // ---- native registration --------------------------------------------

    pub async fn register_app(self: &Arc<Self>, app_id: &str, channel: NativeChannel) -> Reply {
        self.register_native(app_id, NativeInterfaceVersion::V2, channel).await
    }

    pub async fn connect_native_app(self: &Arc<Self>, app_id: &str, channel: NativeChannel) -> Reply {
        self.register_native(app_id, NativeInterfaceVersion::V1, channel).await
    }

    async fn register_native(
        self: &Arc<Self>,
        app_id: &str,
        required: NativeInterfaceVersion,
        channel: NativeChannel,
    ) -> Reply {
        let package = self.packages.lookup(app_id);
        let version_matches = package.as_ref().map(|p| p.native_interface_version == required).unwrap_or(false);
        if !version_matches {
            return Reply::err(None, OrchestratorError::UnmatchedNativeInterfaceVersion.to_string());
        }
        let runtime_status = self.state.lock().registry.get(app_id).map(|info| info.runtime_status);
        if !matches!(runtime_status, Some(RuntimeStatus::Running) | Some(RuntimeStatus::Registered)) {
            return Reply::err(None, OrchestratorError::InvalidRuntimeStatus.to_string());
        }
        if let Err(err) = self.backend.register_app(app_id, channel).await {
            return Reply::err(None, err.to_string());
        }
        Reply::ok(app_id)
    }

    /// Resume a parked bridged launch (§4.5).
    pub fn input_bridged_return(&self, uid: Uid, params: Value) -> bool {
        self.prelauncher.input_bridged_return(uid, params)
    }

    /// Surface a pincode prompt for `app_id`, out of band from the launch
    /// pipeline. Nothing in `AppPackage` marks an app as pincode-protected,
    /// so this is exposed as an explicit operation rather than triggered
    /// automatically from `run_pipeline`.
    pub async fn request_pincode_prompt(&self, app_id: &str) {
        self.notifier.create_pincode_prompt(app_id).await;
    }

    // ---- foreground reconciliation ---------------------------------------

    pub async fn reconcile_foreground(self: &Arc<Self>, snapshot: ForegroundSnapshot) {
        let result = {
            let mut state = self.state.lock();
            foreground::reconcile(&mut state.registry, self.settings.as_ref(), &snapshot)
        };

        for app_id in &result.to_background {
            self.set_app_life_status(app_id, Candidate::Background, None, false).await;
        }
        for app_id in &result.to_foreground {
            self.set_app_life_status(app_id, Candidate::Foreground, None, false).await;
        }

        if result.new_owner.is_some() {
            let mut state = self.state.lock();
            state.last_app.last_launching_apps.clear();
            state.last_app.timer = None;
        } else if result.trigger_last_app {
            self.trigger_to_launch_last_app().await;
        }

        if result.owner_changed {
            tracing::info!(new_owner = ?result.new_owner, "foreground owner changed");
            self.publisher.publish_foreground_app_changed(result.new_owner.as_deref());
        }
        if result.info_changed {
            self.publisher.publish_foreground_extra_info_changed(&snapshot.info);
        }
    }

    // ---- the central state-transition function --------------------------

    /// The single writer of `lifeStatus` (§4.7 steps 1-7, invariant 2). Every
    /// caller above routes through here, including the pipeline, the
    /// foreground reconciler, and backend-originated runtime status changes.
    async fn set_app_life_status(
        self: &Arc<Self>,
        app_id: &str,
        candidate: Candidate,
        launch_reason: Option<&str>,
        splash_requested: bool,
    ) {
        let (previous, preload_mode_before, next, action, log) = {
            let state = self.state.lock();
            let previous = state.registry.get(app_id).map(|info| info.life_status).unwrap_or(LifeStatus::Stop);
            let preload_mode_before = state.registry.get(app_id).map(|info| info.preload_mode).unwrap_or(false);
            let (next, action, log) = route_policy(previous, candidate);
            (previous, preload_mode_before, next, action, log)
        };

        match log {
            RouteLog::Warn => tracing::warn!(app_id, ?previous, ?candidate, ?next, "unexpected lifecycle transition"),
            RouteLog::Error => tracing::error!(app_id, ?previous, ?candidate, ?next, "impossible lifecycle transition"),
            RouteLog::Check => tracing::debug!(app_id, ?previous, ?candidate, ?next, "lifecycle transition"),
            RouteLog::None => {}
        }

        if action == RouteAction::Ignore {
            return;
        }

        let mut arm_timer_for: Option<String> = None;
        let mut cancel_timer_for: Option<String> = None;

        {
            let mut state = self.state.lock();
            {
                let info = state.registry.get_or_create(app_id);
                info.preload_mode = match next {
                    LifeStatus::Preloading => true,
                    LifeStatus::Launching | LifeStatus::Relaunching | LifeStatus::Stop | LifeStatus::Foreground => false,
                    _ => info.preload_mode,
                };
                info.life_status = next;
            }

            if next.enters_loading_list() && app_id != CONTAINER_APP_ID && app_id != INPUT_COMMON_APP_ID {
                let package = self.packages.lookup(app_id);
                let app_type = package.as_ref().map(|p| p.app_type).unwrap_or(AppType::Native);
                let start_time_ms = self.clock.epoch_ms();
                state.loading.retain(|entry| entry.app_id != app_id);
                state.loading.push(LoadingEntry { app_id: app_id.to_string(), app_type, start_time_ms });
                state.last_app.last_launching_apps.insert(app_id.to_string());

                let is_fullscreen_candidate =
                    package.map(|p| p.is_fullscreen_window_type() && !p.is_child_window).unwrap_or(false);
                if is_fullscreen_candidate && state.registry.fullscreen_owner().is_none() {
                    arm_timer_for = Some(app_id.to_string());
                }
            } else if next.leaves_loading_list() {
                state.loading.retain(|entry| entry.app_id != app_id);
                if state.last_app.timer.as_ref().map(|(_, timed_app, _)| timed_app.as_str()) == Some(app_id) {
                    cancel_timer_for = Some(app_id.to_string());
                }
            }
        }

        if let Some(app_id) = arm_timer_for {
            self.arm_last_loading_app_timer(&app_id);
        }
        if cancel_timer_for.is_some() {
            self.cancel_last_loading_app_timer();
        }

        {
            let mut state = self.state.lock();
            self.publisher.publish_app_life_status(&state.registry, app_id, launch_reason, &mut state.close_reasons);
            self.publisher.publish_running(&state.registry);
        }

        if matches!(next, LifeStatus::Launching | LifeStatus::Relaunching)
            && crate::publisher::should_emit_splash(splash_requested, previous, preload_mode_before)
        {
            self.publisher.publish_lifecycle_event(app_id, LifecycleEventKind::Splash);
        }
        if let Some(kind) = lifecycle_kind_for(next) {
            self.publisher.publish_lifecycle_event(app_id, kind);
        }
    }

    // ---- last-app machinery ----------------------------------------------

    /// Is a fullscreen-capable app still within its loading grace period
    /// (§4.7 last-app machinery, testable property 9)? `container` and
    /// `inputcommon` never count.
    fn is_fullscreen_app_loading(&self) -> bool {
        let loading_expired_ms = self.settings.loading_expired_timeout().as_millis() as u64;
        let launch_expired_ms = self.settings.launch_expired_timeout().as_millis() as u64;
        let now_ms = self.clock.epoch_ms();
        let state = self.state.lock();

        let loading_hit = state.loading.iter().any(|entry| {
            entry.app_id != CONTAINER_APP_ID
                && entry.app_id != INPUT_COMMON_APP_ID
                && now_ms.saturating_sub(entry.start_time_ms) < loading_expired_ms
                && self
                    .packages
                    .lookup(&entry.app_id)
                    .map(|pkg| pkg.is_fullscreen_window_type() && !pkg.is_child_window)
                    .unwrap_or(false)
        });
        if loading_hit {
            return true;
        }

        state.in_flight.values().any(|handle| {
            !handle.automatic
                && handle.app_id != CONTAINER_APP_ID
                && handle.app_id != INPUT_COMMON_APP_ID
                && now_ms.saturating_sub(handle.start_time_ms) < launch_expired_ms
                && self
                    .packages
                    .lookup(&handle.app_id)
                    .map(|pkg| pkg.is_fullscreen_window_type() && !pkg.is_child_window)
                    .unwrap_or(false)
        })
    }

    /// Invoke the last-app fallback unless a foreground app already exists
    /// or a fullscreen app is still loading (§4.7).
    async fn trigger_to_launch_last_app(self: &Arc<Self>) {
        let has_foreground = {
            let state = self.state.lock();
            state.registry.list_all().any(|info| info.life_status == LifeStatus::Foreground)
        };
        if has_foreground || self.is_fullscreen_app_loading() {
            return;
        }
        self.last_app_handler.run_last_app().await;
    }

    /// Arm the last-loading-app guard timer for `app_id`, replacing any
    /// existing timer (only one is ever live, §5).
    pub fn arm_last_loading_app_timer(&self, app_id: &str) {
        let deadline = self.clock.epoch_ms() + self.settings.last_loading_app_timeout().as_millis() as u64;
        let mut state = self.state.lock();
        state.last_app.timer = Some((TimerId::for_app(app_id), app_id.to_string(), deadline));
    }

    pub fn cancel_last_loading_app_timer(&self) {
        self.state.lock().last_app.timer = None;
    }

    /// Check whether the armed last-loading-app timer has expired and, if
    /// so, fire the last-app fallback. The `Clock` trait exposes no sleep
    /// primitive, so callers poll this (e.g. on a short interval, or after
    /// advancing a `FakeClock` in tests) rather than this crate spawning a
    /// real timer task.
    pub async fn check_last_loading_app_timer(self: &Arc<Self>) {
        let expired_app = {
            let mut state = self.state.lock();
            let now_ms = self.clock.epoch_ms();
            match &state.last_app.timer {
                Some((_, app_id, deadline)) if now_ms >= *deadline => {
                    let app_id = app_id.clone();
                    state.last_app.timer = None;
                    Some(app_id)
                }
                _ => None,
            }
        };
        if expired_app.is_some() {
            self.trigger_to_launch_last_app().await;
        }
    }

    // ---- cancellation -----------------------------------------------------

    /// Cancel every loading app and close them (§5). Used when the session
    /// is torn down or a bulk reset is requested.
    pub async fn close_all_loading_apps(self: &Arc<Self>) {
        {
            let mut state = self.state.lock();
            state.last_app.last_launching_apps.clear();
            state.last_app.timer = None;
        }
        self.prelauncher.cancel_all();
        self.memory_checker.cancel_all();

        let loading_app_ids: Vec<String> = { self.state.lock().loading.iter().map(|e| e.app_id.clone()).collect() };
        for app_id in loading_app_ids {
            let _ = self.close_by_app_id(&app_id, None, SAM_INTERNAL_ID, Some("stopped launching".to_string())).await;
        }
    }

    /// Cancel in-flight pipeline work for `app_id` and, if it was in the
    /// loading list, drive it back to `Stop` (§4.4, backend-disconnect
    /// boundary behavior §8).
    async fn clear_launching_and_loading_items_by_app_id(self: &Arc<Self>, app_id: &str) {
        let tokens: Vec<CancellationToken> = {
            self.state
                .lock()
                .in_flight
                .values()
                .filter(|handle| handle.app_id == app_id)
                .map(|handle| handle.cancel.clone())
                .collect()
        };
        for token in tokens {
            token.cancel();
        }

        let was_loading = { self.state.lock().loading.iter().any(|entry| entry.app_id == app_id) };
        if was_loading {
            self.set_app_life_status(app_id, Candidate::Stop, None, false).await;
            self.state.lock().loading.retain(|entry| entry.app_id != app_id);
        }
    }
}

/// Map a resulting `LifeStatus` to the lifecycle-event kind it implies, if
/// any (§4.9). `Paused` publishes no event of its own — only the `Pausing`
/// transition that precedes it does.
fn lifecycle_kind_for(status: LifeStatus) -> Option<LifecycleEventKind> {
    match status {
        LifeStatus::Preloading => Some(LifecycleEventKind::Preload),
        LifeStatus::Launching | LifeStatus::Relaunching => Some(LifecycleEventKind::Launch),
        LifeStatus::Foreground => Some(LifecycleEventKind::Foreground),
        LifeStatus::Background => Some(LifecycleEventKind::Background),
        LifeStatus::Pausing => Some(LifecycleEventKind::Pause),
        LifeStatus::Closing => Some(LifecycleEventKind::Close),
        LifeStatus::Stop => Some(LifecycleEventKind::Stop),
        LifeStatus::Paused => None,
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;

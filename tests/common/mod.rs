#![allow(dead_code)]

use async_trait::async_trait;
use nasa_explorer::domain::upstream::{NasaApi, UpstreamError, UpstreamResult};
use nasa_explorer::state::AppState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Arguments the stub upstream saw, for asserting relay behavior.
#[derive(Debug, Default)]
pub struct RecordedCalls {
    pub apod: Vec<Option<String>>,
    pub eonet: Vec<(String, String, Option<String>)>,
    pub neo: Vec<(Option<String>, Option<String>)>,
}

/// Scriptable in-process upstream.
///
/// Responses are consumed front-to-back per endpoint; when the script runs
/// dry the stub answers with a 503, which handlers mask like any other
/// upstream failure.
#[derive(Default)]
pub struct StubNasa {
    apod: Mutex<VecDeque<UpstreamResult>>,
    eonet: Mutex<VecDeque<UpstreamResult>>,
    neo: Mutex<VecDeque<UpstreamResult>>,
    calls: Mutex<RecordedCalls>,
}

impl StubNasa {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_apod(&self, response: UpstreamResult) {
        self.apod.lock().unwrap().push_back(response);
    }

    pub fn push_eonet(&self, response: UpstreamResult) {
        self.eonet.lock().unwrap().push_back(response);
    }

    pub fn push_neo(&self, response: UpstreamResult) {
        self.neo.lock().unwrap().push_back(response);
    }

    pub fn recorded_apod(&self) -> Vec<Option<String>> {
        self.calls.lock().unwrap().apod.clone()
    }

    pub fn recorded_eonet(&self) -> Vec<(String, String, Option<String>)> {
        self.calls.lock().unwrap().eonet.clone()
    }

    pub fn recorded_neo(&self) -> Vec<(Option<String>, Option<String>)> {
        self.calls.lock().unwrap().neo.clone()
    }

    fn next(queue: &Mutex<VecDeque<UpstreamResult>>) -> UpstreamResult {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(UpstreamError::Status(503)))
    }
}

#[async_trait]
impl NasaApi for StubNasa {
    async fn apod<'a>(&self, date: Option<&'a str>) -> UpstreamResult {
        self.calls
            .lock()
            .unwrap()
            .apod
            .push(date.map(str::to_string));

        Self::next(&self.apod)
    }

    async fn eonet_events<'a>(
        &self,
        days: &'a str,
        status: &'a str,
        category: Option<&'a str>,
    ) -> UpstreamResult {
        self.calls.lock().unwrap().eonet.push((
            days.to_string(),
            status.to_string(),
            category.map(str::to_string),
        ));

        Self::next(&self.eonet)
    }

    async fn neo_feed<'a>(
        &self,
        start_date: Option<&'a str>,
        end_date: Option<&'a str>,
    ) -> UpstreamResult {
        self.calls
            .lock()
            .unwrap()
            .neo
            .push((start_date.map(str::to_string), end_date.map(str::to_string)));

        Self::next(&self.neo)
    }
}

/// Builds application state over a stub upstream.
pub fn create_test_state(stub: Arc<StubNasa>) -> AppState {
    AppState::new(stub)
}

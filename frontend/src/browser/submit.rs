use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};

use crate::config;
use crate::error::SiteError;
use crate::interaction::forms::{Submission, Submitter};

/// Stand-in for a real endpoint: waits, then succeeds.
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, submission: Submission) -> LocalBoxFuture<'static, Result<(), SiteError>> {
        let delay_ms = self.delay_ms;
        async move {
            debug!("Simulating submission for {}", submission.email);
            TimeoutFuture::new(delay_ms).await;
            Ok(())
        }
        .boxed_local()
    }
}

/// Posts the submission as JSON.
pub struct HttpSubmitter {
    pub url: String,
}

impl Submitter for HttpSubmitter {
    fn submit(&self, submission: Submission) -> LocalBoxFuture<'static, Result<(), SiteError>> {
        let url = self.url.clone();
        async move {
            let response = Request::post(&url)
                .json(&submission)
                .map_err(|e| SiteError::Submission(e.to_string()))?
                .send()
                .await
                .map_err(|e| SiteError::Submission(e.to_string()))?;
            if response.ok() {
                Ok(())
            } else {
                Err(SiteError::Submission(format!("{} answered {}", url, response.status())))
            }
        }
        .boxed_local()
    }
}

pub fn default_submitter() -> Rc<dyn Submitter> {
    match config::submit_endpoint() {
        Some(url) => {
            info!("Submitting forms to {}", url);
            Rc::new(HttpSubmitter { url })
        }
        None => Rc::new(SimulatedSubmitter {
            delay_ms: config::SIMULATED_SUBMIT_DELAY_MS,
        }),
    }
}

use crate::answer::Answer;
use crate::errors::ClientError;
use std::time::Duration;

/// Outcome of one client round trip.
///
/// `rtt` is measured from the start of the call until it returned, so a
/// failed exchange still reports how long it took.
#[derive(Debug)]
pub struct Exchange {
    pub result: Result<Answer, ClientError>,
    pub rtt: Duration,
}

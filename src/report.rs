use std::fmt;

use crate::api::{LookupResult, RedirectHop};

/// Human readable rendering of a [`LookupResult`].
pub struct Report<'a> {
    result: &'a LookupResult,
    show_hops: bool,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a LookupResult) -> Self {
        Self {
            result,
            show_hops: false,
        }
    }

    /// Also list every hop before the final destination.
    pub fn with_hops(mut self, show_hops: bool) -> Self {
        self.show_hops = show_hops;
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            LookupResult::RemoteError(err) => write!(
                f,
                "Error:\t{}\nUrl:\t{}\nUser-Agent:\t{}",
                err.error, err.url, err.user_agent
            ),
            LookupResult::Redirects(chain) => {
                if self.show_hops {
                    for (index, hop) in chain.hops().enumerate() {
                        writeln!(f, "{}", HopLine { index, hop })?;
                    }
                    writeln!(f)?;
                }
                write!(f, "Last Redirect Found: {}", chain.final_hop().destination())
            }
        }
    }
}

struct HopLine<'a> {
    index: usize,
    hop: &'a RedirectHop,
}

impl fmt::Display for HopLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} {} {}",
            self.index + 1,
            self.hop.status_code.code,
            self.hop.status_code.phrase,
            self.hop.destination()
        )?;

        let location = self.hop.headers.as_ref().and_then(|h| h.location.as_deref());
        match location {
            Some(location) if self.hop.status_code.is_redirect() => write!(f, " -> {}", location),
            _ => Ok(()),
        }
    }
}

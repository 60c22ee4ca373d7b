//! Wallet connection widget state
//!
//! Plain state machine behind the `WalletConnection` component. The component
//! feeds it wallet identity changes and fetch results; the widget decides what
//! to show. Each fetch is tagged with a generation so a result that arrives
//! after a disconnect or after a newer fetch is dropped instead of overwriting
//! fresher state.

use shared::utils::{format_sol, lamports_to_sol, truncate_address};

use crate::error::RpcError;
use crate::services::rpc::BalanceSource;

/// Outcome of reconciling the widget with the wallet's current identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdentityChange {
    /// A new identity appeared; notify listeners and fetch its balance
    Connected(String),
    /// The identity went away; the widget was reset
    Disconnected,
    Unchanged,
}

/// Handle for one in-flight balance fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub identity: String,
    generation: u64,
}

/// Result of running a fetch, ready to be applied to the widget.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    pub result: Result<u64, RpcError>,
}

/// What the widget renders.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetView {
    ConnectPrompt,
    Connected {
        address_short: String,
        balance_label: String,
        refresh_label: &'static str,
        refresh_disabled: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetState {
    identity: Option<String>,
    balance: Option<f64>,
    loading: bool,
    generation: u64,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Balance in SOL, `None` until a fetch succeeds
    pub fn balance(&self) -> Option<f64> {
        self.balance
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Reconcile with the identity the wallet currently reports.
    pub fn observe_identity(&mut self, identity: Option<&str>) -> IdentityChange {
        if identity == self.identity.as_deref() {
            return IdentityChange::Unchanged;
        }

        match identity {
            Some(new) => {
                self.identity = Some(new.to_string());
                self.balance = None;
                IdentityChange::Connected(new.to_string())
            }
            None => {
                self.disconnect();
                IdentityChange::Disconnected
            }
        }
    }

    /// Start a fetch for the current identity. Not gated on `loading`.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        let identity = self.identity.clone()?;
        self.generation += 1;
        self.loading = true;
        self.balance = None;
        Some(FetchTicket {
            identity,
            generation: self.generation,
        })
    }

    /// User-triggered refresh; ignored while a fetch is outstanding.
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        if self.loading {
            return None;
        }
        self.begin_fetch()
    }

    /// Apply a finished fetch. Returns `false` if the ticket was stale and nothing changed.
    pub fn complete(&mut self, outcome: FetchOutcome) -> bool {
        let FetchOutcome { ticket, result } = outcome;
        if ticket.generation != self.generation || self.identity.as_deref() != Some(ticket.identity.as_str()) {
            log::debug!("Dropping stale balance result for {}", ticket.identity);
            return false;
        }

        match result {
            Ok(lamports) => self.balance = Some(lamports_to_sol(lamports)),
            Err(e) => {
                log::error!("Error fetching balance: {}", e);
                self.balance = None;
            }
        }
        self.loading = false;
        true
    }

    /// Forget the identity and invalidate any in-flight fetch.
    pub fn disconnect(&mut self) {
        self.identity = None;
        self.balance = None;
        self.loading = false;
        self.generation += 1;
    }

    pub fn balance_label(&self) -> String {
        if self.loading {
            return "Loading...".to_string();
        }
        match self.balance {
            Some(sol) => format!("{} SOL", format_sol(sol)),
            None => "0 SOL".to_string(),
        }
    }

    pub fn view(&self) -> WidgetView {
        match &self.identity {
            None => WidgetView::ConnectPrompt,
            Some(identity) => WidgetView::Connected {
                address_short: truncate_address(identity),
                balance_label: self.balance_label(),
                refresh_label: if self.loading { "Refreshing..." } else { "Refresh Balance" },
                refresh_disabled: self.loading,
            },
        }
    }
}

/// Run the balance query for `ticket` against `source`.
pub async fn fetch_balance<S: BalanceSource + ?Sized>(source: &S, ticket: FetchTicket) -> FetchOutcome {
    let result = source.get_balance(&ticket.identity).await;
    FetchOutcome { ticket, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    const ADDR: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
    const OTHER: &str = "So11111111111111111111111111111111111111112";

    struct FixedBalance(Result<u64, RpcError>);

    #[async_trait(?Send)]
    impl BalanceSource for FixedBalance {
        async fn get_balance(&self, _address: &str) -> Result<u64, RpcError> {
            self.0.clone()
        }
    }

    fn connected() -> WidgetState {
        let mut state = WidgetState::new();
        state.observe_identity(Some(ADDR));
        state
    }

    #[test]
    fn test_no_identity_shows_connect_prompt() {
        let state = WidgetState::new();
        assert_eq!(state.view(), WidgetView::ConnectPrompt);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_identity_reported_once() {
        let mut state = WidgetState::new();
        assert_eq!(
            state.observe_identity(Some(ADDR)),
            IdentityChange::Connected(ADDR.to_string())
        );
        assert_eq!(state.observe_identity(Some(ADDR)), IdentityChange::Unchanged);
        assert_eq!(state.observe_identity(Some(ADDR)), IdentityChange::Unchanged);
        assert!(matches!(state.view(), WidgetView::Connected { .. }));
    }

    #[test]
    fn test_account_switch_is_a_new_connection() {
        let mut state = connected();
        assert_eq!(
            state.observe_identity(Some(OTHER)),
            IdentityChange::Connected(OTHER.to_string())
        );
        assert_eq!(state.identity(), Some(OTHER));
    }

    #[tokio::test]
    async fn test_successful_fetch_displays_four_decimals() {
        let mut state = connected();
        let ticket = state.begin_fetch().unwrap();
        assert!(state.is_loading());
        assert_eq!(state.balance_label(), "Loading...");

        let outcome = fetch_balance(&FixedBalance(Ok(1_500_000_000)), ticket).await;
        assert!(state.complete(outcome));

        assert!(!state.is_loading());
        assert_eq!(state.balance(), Some(1.5));
        assert_eq!(
            state.view(),
            WidgetView::Connected {
                address_short: "8W6Qgink...fSKuJKAL".to_string(),
                balance_label: "1.5000 SOL".to_string(),
                refresh_label: "Refresh Balance",
                refresh_disabled: false,
            }
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_clears_loading_and_leaves_balance_unset() {
        let mut state = connected();
        let ticket = state.begin_fetch().unwrap();
        let source = FixedBalance(Err(RpcError::Transport("offline".to_string())));

        assert!(state.complete(fetch_balance(&source, ticket).await));

        assert!(!state.is_loading());
        assert_eq!(state.balance(), None);
        assert_eq!(state.balance_label(), "0 SOL");
    }

    #[test]
    fn test_refresh_disabled_while_loading() {
        let mut state = connected();
        let ticket = state.begin_fetch().unwrap();
        assert!(state.refresh().is_none());
        match state.view() {
            WidgetView::Connected { refresh_label, refresh_disabled, .. } => {
                assert_eq!(refresh_label, "Refreshing...");
                assert!(refresh_disabled);
            }
            other => panic!("unexpected view: {:?}", other),
        }

        state.complete(FetchOutcome { ticket, result: Ok(0) });
        assert!(state.refresh().is_some());
    }

    #[test]
    fn test_refresh_without_identity_is_noop() {
        let mut state = WidgetState::new();
        assert!(state.refresh().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_disconnect_during_fetch_returns_to_prompt() {
        let mut state = connected();
        let ticket = state.begin_fetch().unwrap();

        assert_eq!(state.observe_identity(None), IdentityChange::Disconnected);
        assert_eq!(state.view(), WidgetView::ConnectPrompt);
        assert!(!state.is_loading());

        // The late result must not resurrect anything
        assert!(!state.complete(FetchOutcome { ticket, result: Ok(42) }));
        assert_eq!(state.view(), WidgetView::ConnectPrompt);
        assert_eq!(state.balance(), None);
    }

    #[test]
    fn test_superseded_fetch_is_dropped() {
        let mut state = connected();
        let first = state.begin_fetch().unwrap();
        let second = state.begin_fetch().unwrap();

        // Second resolves first, then the older one arrives
        assert!(state.complete(FetchOutcome { ticket: second, result: Ok(2_000_000_000) }));
        assert!(!state.complete(FetchOutcome { ticket: first, result: Ok(1_000_000_000) }));

        assert_eq!(state.balance(), Some(2.0));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_result_does_not_clear_newer_loading() {
        let mut state = connected();
        let first = state.begin_fetch().unwrap();
        let _second = state.begin_fetch().unwrap();

        assert!(!state.complete(FetchOutcome { ticket: first, result: Ok(1) }));
        assert!(state.is_loading());
    }

    #[test]
    fn test_reconnect_after_disconnect_is_reported_again() {
        let mut state = connected();
        state.observe_identity(None);
        assert_eq!(
            state.observe_identity(Some(ADDR)),
            IdentityChange::Connected(ADDR.to_string())
        );
    }
}

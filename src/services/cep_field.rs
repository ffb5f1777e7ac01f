//! CEP input controller.
//!
//! Every keystroke starts a new input generation. A completed 8-digit CEP
//! spawns one lookup tagged with its generation; a newer keystroke aborts it,
//! and a result that still arrives for an old generation is dropped instead of
//! overwriting the address fields.

use crate::error::LookupError;
use crate::models::address::Address;
use crate::services::cep_client::AddressProvider;
use crate::utils::cep::{cep_digits, format_cep};
use futures::FutureExt;
use parking_lot::Mutex;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, error, info, warn};

/// Fired when a lookup ends without an address. It runs while the field
/// state is locked, so it must not call back into the `CepField`.
pub type NotFoundCallback = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Address),
    NotFound,
    /// A newer keystroke arrived before the lookup finished.
    Superseded,
}

#[derive(Default)]
struct FieldState {
    generation: u64,
    address: Address,
    in_flight: Option<AbortHandle>,
}

pub struct CepInput {
    pub formatted: String,
    pub pending: Option<LookupHandle>,
}

pub struct LookupHandle {
    generation: u64,
    task: JoinHandle<LookupOutcome>,
}

impl LookupHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub async fn wait(self) -> LookupOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => LookupOutcome::Superseded,
            Err(e) => {
                error!("CEP lookup task {} failed: {}", self.generation, e);
                LookupOutcome::NotFound
            }
        }
    }
}

pub struct CepField {
    provider: Arc<dyn AddressProvider>,
    state: Arc<Mutex<FieldState>>,
    on_not_found: NotFoundCallback,
}

impl CepField {
    pub fn new(provider: Arc<dyn AddressProvider>, on_not_found: NotFoundCallback) -> Self {
        Self {
            provider,
            state: Arc::new(Mutex::new(FieldState::default())),
            on_not_found,
        }
    }

    /// Handles one keystroke. Must be called from inside a tokio runtime,
    /// since a complete CEP spawns its lookup task.
    pub fn input(&self, raw: &str) -> CepInput {
        let formatted = format_cep(raw);

        let mut state = self.state.lock();
        state.generation += 1;
        let generation = state.generation;

        if let Some(previous) = state.in_flight.take() {
            debug!("Aborting CEP lookup superseded by generation {}", generation);
            previous.abort();
        }

        let Some(cep) = cep_digits(raw) else {
            return CepInput { formatted, pending: None };
        };

        info!("CEP {} complete, starting lookup (generation {})", cep, generation);
        let task = tokio::spawn(run_lookup(
            self.provider.clone(),
            self.state.clone(),
            self.on_not_found.clone(),
            cep,
            generation,
        ));
        state.in_flight = Some(task.abort_handle());

        CepInput {
            formatted,
            pending: Some(LookupHandle { generation, task }),
        }
    }

    /// Snapshot of the dependent street/neighborhood/city/state fields.
    pub fn address(&self) -> Address {
        self.state.lock().address.clone()
    }

    pub fn generation(&self) -> u64 {
        self.state.lock().generation
    }
}

async fn run_lookup(
    provider: Arc<dyn AddressProvider>,
    state: Arc<Mutex<FieldState>>,
    on_not_found: NotFoundCallback,
    cep: String,
    generation: u64,
) -> LookupOutcome {
    // um provider que entra em pânico cai no mesmo caminho de erro
    let result = AssertUnwindSafe(provider.lookup(&cep))
        .catch_unwind()
        .await
        .unwrap_or(Err(LookupError::ProviderPanicked));

    // checagem de geração e callback na mesma seção crítica que `input`
    let mut guard = state.lock();
    if guard.generation != generation {
        debug!(
            "Discarding CEP {} result for generation {} (current {})",
            cep, generation, guard.generation
        );
        return LookupOutcome::Superseded;
    }
    guard.in_flight = None;

    match result {
        Ok(Some(address)) => {
            guard.address = address.clone();
            LookupOutcome::Found(address)
        }
        Ok(None) => {
            warn!("CEP {} not found", cep);
            guard.address = Address::default();
            on_not_found(&cep);
            LookupOutcome::NotFound
        }
        Err(e) => {
            warn!("CEP {} lookup failed: {}", cep, e);
            guard.address = Address::default();
            on_not_found(&cep);
            LookupOutcome::NotFound
        }
    }
}

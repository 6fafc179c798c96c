mod client;
mod payloads;

pub use client::{HttpSimulationClient, SimulationApi};
pub use payloads::{
    DelayRequest, DelayResponse, ExplainRequest, ExplainResponse, DEFAULT_DELAY_MESSAGE,
    FALLBACK_EXPLANATION,
};

#[cfg(test)]
pub(crate) mod testing;

//! Seams to the services living outside of the breadboard: something that writes new
//! circuits from a description of what the user wants and something that explains them.
use crate::catalog;
use crate::circuit::CircuitDescription;
use crate::error::{Error, Result};
use crate::exchange;
use log::{info, warn};

/// Shown in place of an explanation when the explainer fails.
pub const EXPLANATION_UNAVAILABLE: &str = "No explanation is available for this circuit right now.";

/// Turns free text into a circuit in the [exchange] format.
pub trait CircuitGenerator {
    fn generate(&self, intent: &str) -> Result<String>;
}

/// What an explainer gets to see of a circuit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExplainRequest {
    pub title: String,
    /// Part numbers, `7408`, `7432`...
    pub chips: Vec<String>,
    pub description: String,
}

impl From<&CircuitDescription> for ExplainRequest {
    fn from(circuit: &CircuitDescription) -> Self {
        ExplainRequest {
            title: circuit.title.clone(),
            chips: circuit.chips.iter().map(|c| c.ty.to_string()).collect(),
            description: circuit.description.clone(),
        }
    }
}

/// Writes a human readable explanation of a circuit.
pub trait CircuitExplainer {
    fn explain(&self, request: &ExplainRequest) -> Result<String>;
}

/// Where [find_circuit] found its answer.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    /// A key of the [catalog].
    Catalog(&'static str),
    Generated(Box<CircuitDescription>),
}

impl Lookup {
    pub fn circuit(&self) -> Option<&CircuitDescription> {
        match self {
            Lookup::Catalog(key) => catalog::get(key),
            Lookup::Generated(circuit) => Some(&**circuit),
        }
    }
}

/// Finds a circuit for `query`, first in the catalog and then by asking `generator`.
///
/// A generated circuit that can't be decoded is a [Error::GenerationFailure], a
/// generator that produced nothing is a [Error::NotFound]. Neither is ever replaced by
/// some other circuit.
pub fn find_circuit<G: CircuitGenerator + ?Sized>(query: &str, generator: &G) -> Result<Lookup> {
    if let Some(key) = catalog::match_keyword(query) {
        info!("{:?} matches catalog entry {}", query, key);
        return Ok(Lookup::Catalog(key));
    }

    let json = generator
        .generate(query)
        .map_err(|e| Error::GenerationFailure(e.to_string()))?;
    if json.trim().is_empty() {
        return Err(Error::NotFound(query.to_string()));
    }

    let circuit = exchange::decode(&json).map_err(|e| Error::GenerationFailure(e.to_string()))?;
    if circuit.chips.is_empty() && circuit.wires.is_empty() {
        return Err(Error::NotFound(query.to_string()));
    }
    info!("generated {:?} for {:?}", circuit.title, query);
    Ok(Lookup::Generated(Box::new(circuit)))
}

/// Returns the explanation of `circuit`, the one it carries if any, otherwise the
/// explainer's. Never fails, see [EXPLANATION_UNAVAILABLE].
pub fn explain_circuit<E: CircuitExplainer + ?Sized>(
    circuit: &CircuitDescription,
    explainer: &E,
) -> String {
    if let Some(explanation) = &circuit.explanation {
        return explanation.clone();
    }
    match explainer.explain(&ExplainRequest::from(circuit)) {
        Ok(explanation) if !explanation.trim().is_empty() => explanation,
        Ok(_) => EXPLANATION_UNAVAILABLE.to_string(),
        Err(e) => {
            warn!("explaining {:?}: {}", circuit.title, e);
            EXPLANATION_UNAVAILABLE.to_string()
        }
    }
}

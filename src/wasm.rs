//! WebAssembly entry point.
//!
//! Lets a browser front end run the solver. The front end owns item entry
//! and rendering; it passes a plain object shaped like [`KnapsackConfig`]
//! and receives the result plus an assessment of the best genome.

use crate::ga::{Assessment, KnapsackConfig, KnapsackResult, KnapsackSolver};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// What `solveKnapsack` returns to JavaScript.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Solution {
    result: KnapsackResult,
    assessment: Assessment,
}

/// Validates `config`, runs to completion and returns the [`Solution`].
///
/// Invalid input is rejected with a descriptive string error.
#[wasm_bindgen(js_name = solveKnapsack)]
pub fn solve_knapsack(config: JsValue) -> Result<JsValue, JsValue> {
    let config: KnapsackConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("invalid config: {e}")))?;
    let solver = KnapsackSolver::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let result = solver.run();
    let assessment = solver.knapsack().assess(&result.best);

    serde_wasm_bindgen::to_value(&Solution { result, assessment }).map_err(JsValue::from)
}

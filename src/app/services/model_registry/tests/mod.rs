//! Tests for the model registry module


use serde_json::{Value, json};

/// Fitted linear model spec: weights [0.5, -0.25], intercept 0.1
pub fn linear_spec() -> Value {
    json!({
        "kind": "linear",
        "weights": [0.5, -0.25],
        "intercept": 0.1
    })
}

/// Fitted decision tree spec over two features:
/// root splits on feature 0 at 0.5; left leaf 1.0, right subtree splits on
/// feature 1 at 0.2 into leaves 2.0 / 3.0
pub fn tree_spec() -> Value {
    json!({
        "kind": "decision_tree",
        "nodes": [
            {"feature": 0, "threshold": 0.5, "left": 1, "right": 2},
            {"value": 1.0},
            {"feature": 1, "threshold": 0.2, "left": 3, "right": 4},
            {"value": 2.0},
            {"value": 3.0}
        ]
    })
}

/// Two-tree forest built from constant single-leaf trees
pub fn forest_spec() -> Value {
    json!({
        "kind": "random_forest",
        "trees": [
            {"nodes": [{"value": 1.0}]},
            {"nodes": [{"value": 3.0}]}
        ]
    })
}

/// Boosted ensemble: base 0.5, learning rate 0.1, two constant trees
pub fn boosting_spec() -> Value {
    json!({
        "kind": "gradient_boosting",
        "base_score": 0.5,
        "learning_rate": 0.1,
        "trees": [
            {"nodes": [{"value": 1.0}]},
            {"nodes": [{"value": 2.0}]}
        ]
    })
}

/// Minimal LSTM with one input feature and one hidden unit; all weights
/// zero, so every prediction equals `b_out`.
pub fn lstm_spec(b_out: f64) -> Value {
    json!({
        "kind": "lstm",
        "input_size": 1,
        "hidden_size": 1,
        "w_ii": [[0.0]], "w_hi": [[0.0]], "b_i": [0.0],
        "w_if": [[0.0]], "w_hf": [[0.0]], "b_f": [0.0],
        "w_ig": [[0.0]], "w_hg": [[0.0]], "b_g": [0.0],
        "w_io": [[0.0]], "w_ho": [[0.0]], "b_o": [0.0],
        "w_out": [0.0],
        "b_out": b_out
    })
}

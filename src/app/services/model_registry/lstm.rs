//! Fitted LSTM sequence model (inference only)
//!
//! A single LSTM layer unrolled over the rows of one window, followed by a
//! dense head that maps the final hidden state to the SOC scalar. Weights
//! come fitted from the model file; there is no training path.

use ndarray::{Array1, Array2, ArrayView2};
use serde::Deserialize;

use super::registry::SequenceModel;
use crate::{Error, Result};

/// Fitted single-layer LSTM regressor.
///
/// Gate weight matrices are `hidden_size x input_size` for the input path
/// (`w_i*`) and `hidden_size x hidden_size` for the recurrent path (`w_h*`),
/// with one bias vector per gate. Model files store matrices as nested row
/// arrays and vectors as plain arrays.
#[derive(Debug, Clone, Deserialize)]
pub struct LstmRegressor {
    pub input_size: usize,
    pub hidden_size: usize,

    // Input gate
    #[serde(deserialize_with = "matrix_from_rows")]
    w_ii: Array2<f64>,
    #[serde(deserialize_with = "matrix_from_rows")]
    w_hi: Array2<f64>,
    #[serde(deserialize_with = "vector_from_list")]
    b_i: Array1<f64>,

    // Forget gate
    #[serde(deserialize_with = "matrix_from_rows")]
    w_if: Array2<f64>,
    #[serde(deserialize_with = "matrix_from_rows")]
    w_hf: Array2<f64>,
    #[serde(deserialize_with = "vector_from_list")]
    b_f: Array1<f64>,

    // Cell candidate
    #[serde(deserialize_with = "matrix_from_rows")]
    w_ig: Array2<f64>,
    #[serde(deserialize_with = "matrix_from_rows")]
    w_hg: Array2<f64>,
    #[serde(deserialize_with = "vector_from_list")]
    b_g: Array1<f64>,

    // Output gate
    #[serde(deserialize_with = "matrix_from_rows")]
    w_io: Array2<f64>,
    #[serde(deserialize_with = "matrix_from_rows")]
    w_ho: Array2<f64>,
    #[serde(deserialize_with = "vector_from_list")]
    b_o: Array1<f64>,

    // Dense head mapping the final hidden state to the output scalar
    #[serde(deserialize_with = "vector_from_list")]
    w_out: Array1<f64>,
    b_out: f64,
}

/// Deserialize a matrix from nested row arrays
fn matrix_from_rows<'de, D>(deserializer: D) -> std::result::Result<Array2<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;

    let rows: Vec<Vec<f64>> = serde::Deserialize::deserialize(deserializer)?;
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|r| r.len() != ncols) {
        return Err(D::Error::custom("ragged weight matrix"));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((nrows, ncols), flat).map_err(D::Error::custom)
}

/// Deserialize a vector from a plain array
fn vector_from_list<'de, D>(deserializer: D) -> std::result::Result<Array1<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values: Vec<f64> = serde::Deserialize::deserialize(deserializer)?;
    Ok(Array1::from_vec(values))
}

impl LstmRegressor {
    /// One time step of the LSTM cell
    fn step(
        &self,
        x: &Array1<f64>,
        h_prev: &Array1<f64>,
        c_prev: &Array1<f64>,
    ) -> (Array1<f64>, Array1<f64>) {
        // i = sigmoid(W_ii x + W_hi h + b_i)
        let i_gate = sigmoid(&(self.w_ii.dot(x) + self.w_hi.dot(h_prev) + &self.b_i));
        // f = sigmoid(W_if x + W_hf h + b_f)
        let f_gate = sigmoid(&(self.w_if.dot(x) + self.w_hf.dot(h_prev) + &self.b_f));
        // g = tanh(W_ig x + W_hg h + b_g)
        let g = tanh(&(self.w_ig.dot(x) + self.w_hg.dot(h_prev) + &self.b_g));
        // o = sigmoid(W_io x + W_ho h + b_o)
        let o_gate = sigmoid(&(self.w_io.dot(x) + self.w_ho.dot(h_prev) + &self.b_o));

        // c = f * c_prev + i * g
        let c_next = &f_gate * c_prev + &i_gate * &g;
        // h = o * tanh(c)
        let h_next = &o_gate * &tanh(&c_next);

        (h_next, c_next)
    }

    /// Check the fitted shapes agree with the declared sizes
    fn validate_shapes(&self) -> Result<()> {
        let input_shapes_ok = [&self.w_ii, &self.w_if, &self.w_ig, &self.w_io]
            .iter()
            .all(|w| w.shape() == [self.hidden_size, self.input_size]);
        let recurrent_shapes_ok = [&self.w_hi, &self.w_hf, &self.w_hg, &self.w_ho]
            .iter()
            .all(|w| w.shape() == [self.hidden_size, self.hidden_size]);
        let bias_shapes_ok = [&self.b_i, &self.b_f, &self.b_g, &self.b_o]
            .iter()
            .all(|b| b.len() == self.hidden_size);

        if !input_shapes_ok || !recurrent_shapes_ok || !bias_shapes_ok {
            return Err(Error::prediction(
                "LSTM weight shapes disagree with declared sizes",
            ));
        }
        if self.w_out.len() != self.hidden_size {
            return Err(Error::prediction(
                "LSTM dense head shape disagrees with hidden size",
            ));
        }
        Ok(())
    }
}

impl SequenceModel for LstmRegressor {
    fn predict(&self, window: ArrayView2<'_, f64>) -> Result<f64> {
        if window.ncols() != self.input_size {
            return Err(Error::prediction(format!(
                "LSTM expects {} features per row, got {}",
                self.input_size,
                window.ncols()
            )));
        }
        self.validate_shapes()?;

        let mut h = Array1::zeros(self.hidden_size);
        let mut c = Array1::zeros(self.hidden_size);

        for row in window.rows() {
            let x = row.to_owned();
            let (h_next, c_next) = self.step(&x, &h, &c);
            h = h_next;
            c = c_next;
        }

        Ok(self.w_out.dot(&h) + self.b_out)
    }
}

fn sigmoid(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(|v| 1.0 / (1.0 + (-v).exp()))
}

fn tanh(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(f64::tanh)
}

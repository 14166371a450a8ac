use crate::error::Result;
use crate::network::params::{Gradients, Params};

/// Plain stochastic gradient descent with a multiplicative learning-rate decay.
#[derive(Debug, Clone)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies `param -= learning_rate * grad` to all four parameters in place.
    pub fn step(&self, params: &mut Params, grads: &Gradients) -> Result<()> {
        for (param, grad) in params.with_grads_mut(grads) {
            param.scaled_add_assign(grad, -self.learning_rate)?;
        }
        Ok(())
    }

    pub fn decay(&mut self, factor: f64) {
        self.learning_rate *= factor;
    }
}

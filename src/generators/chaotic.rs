//! Chaos-based generators: one-dimensional maps (logistic, tent),
//! two-dimensional maps (Hénon, Ikeda) and continuous attractors
//! (Lorenz, Rössler) discretized with a forward Euler step.
//!
//! These emit floating-point trajectory values, rounded for display
//! stability (5 decimals for the maps, 4 for the attractors).

use crate::config::Params;
use crate::generators::Generator;
use crate::utils::arith::round_display;

/// Logistic map `x = r * x * (1 - x)` on the open unit interval.
pub(crate) struct Logistic {
    x: f64,
    r: f64,
}

impl Logistic {
    pub(crate) fn new(params: &Params) -> Self {
        Logistic {
            x: params.float_seed,
            r: params.param_r,
        }
    }
}

impl Generator for Logistic {
    fn next(&mut self) -> f64 {
        let out = round_display(self.x, 5);
        self.x = self.r * self.x * (1.0 - self.x);
        out
    }
}

/// Tent map: `x < 0.5 → mu * x`, otherwise `mu * (1 - x)`.
pub(crate) struct Tent {
    x: f64,
    mu: f64,
}

impl Tent {
    pub(crate) fn new(params: &Params) -> Self {
        Tent {
            x: params.float_seed,
            mu: params.param_r,
        }
    }
}

impl Generator for Tent {
    fn next(&mut self) -> f64 {
        let out = round_display(self.x, 5);
        self.x = if self.x < 0.5 {
            self.mu * self.x
        } else {
            self.mu * (1.0 - self.x)
        };
        out
    }
}

/// Hénon map, emitting the x coordinate of the orbit.
pub(crate) struct Henon {
    x: f64,
    y: f64,
    a: f64,
    b: f64,
}

impl Henon {
    pub(crate) fn new(params: &Params) -> Self {
        Henon {
            x: params.float_seed,
            y: 0.1,
            a: params.param_a,
            b: params.param_b,
        }
    }
}

impl Generator for Henon {
    fn next(&mut self) -> f64 {
        let out = round_display(self.x, 5);
        let nx = 1.0 - self.a * self.x * self.x + self.y;
        let ny = self.b * self.x;
        self.x = nx;
        self.y = ny;
        out
    }
}

/// Ikeda map with the standard optical-cavity phase term.
pub(crate) struct Ikeda {
    x: f64,
    y: f64,
    u: f64,
}

impl Ikeda {
    pub(crate) fn new(params: &Params) -> Self {
        Ikeda {
            x: params.float_seed,
            y: 0.1,
            u: params.param_a,
        }
    }
}

impl Generator for Ikeda {
    fn next(&mut self) -> f64 {
        let out = round_display(self.x, 5);
        let t = 0.4 - 6.0 / (1.0 + self.x * self.x + self.y * self.y);
        let nx = 1.0 + self.u * (self.x * t.cos() - self.y * t.sin());
        let ny = self.u * (self.x * t.sin() + self.y * t.cos());
        self.x = nx;
        self.y = ny;
        out
    }
}

/// Lorenz attractor, forward Euler, emitting the x coordinate.
pub(crate) struct Lorenz {
    x: f64,
    y: f64,
    z: f64,
    sigma: f64,
    rho: f64,
    beta: f64,
    dt: f64,
}

impl Lorenz {
    pub(crate) fn new(params: &Params) -> Self {
        Lorenz {
            x: params.float_seed,
            y: 1.0,
            z: 1.0,
            sigma: params.param_a,
            rho: params.param_b,
            beta: params.param_c,
            dt: params.param_dt,
        }
    }
}

impl Generator for Lorenz {
    fn next(&mut self) -> f64 {
        let out = round_display(self.x, 4);
        let dx = self.sigma * (self.y - self.x);
        let dy = self.x * (self.rho - self.z) - self.y;
        let dz = self.x * self.y - self.beta * self.z;
        self.x += dx * self.dt;
        self.y += dy * self.dt;
        self.z += dz * self.dt;
        out
    }
}

/// Rössler attractor, forward Euler, emitting the x coordinate.
pub(crate) struct Rossler {
    x: f64,
    y: f64,
    z: f64,
    a: f64,
    b: f64,
    c: f64,
    dt: f64,
}

impl Rossler {
    pub(crate) fn new(params: &Params) -> Self {
        Rossler {
            x: params.float_seed,
            y: 1.0,
            z: 1.0,
            a: params.param_a,
            b: params.param_b,
            c: params.param_c,
            dt: params.param_dt,
        }
    }
}

impl Generator for Rossler {
    fn next(&mut self) -> f64 {
        let out = round_display(self.x, 4);
        let dx = -self.y - self.z;
        let dy = self.x + self.a * self.y;
        let dz = self.b + self.z * (self.x - self.c);
        self.x += dx * self.dt;
        self.y += dy * self.dt;
        self.z += dz * self.dt;
        out
    }
}

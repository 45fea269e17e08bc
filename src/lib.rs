pub mod configuration;

pub mod integration {
    pub mod integrationerror;
    pub mod integrationinput;
    pub mod partitionestimator;
    pub mod rightrectangle;
    pub mod precisionintegrator;
}

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod interval;

    pub mod function {
        pub mod univariatefunction;
        pub mod polynomial;
        pub mod elementary;
        pub mod integrand;
    }

    pub mod optimize {
        pub mod boundedmaximizer;
        pub mod brentmaximizer;
        pub mod gridsearchmaximizer;
    }
}

pub mod reference {
    pub mod simpsonintegrator;
}

pub use integration::integrationerror::{
    InputKind,
    IntegrationError
};
pub use integration::integrationinput::{
    IntegrationInput,
    IntegrationInputBuilder
};
pub use integration::partitionestimator::{
    PartitionEstimate,
    PartitionEstimator,
    MAX_STEPS
};
pub use integration::precisionintegrator::{
    compute_integral,
    IntegralResult,
    PrecisionIntegrator
};
pub use math::function::univariatefunction::{
    DifferentiableFunction,
    UnivariateFunction
};
pub use math::interval::Interval;

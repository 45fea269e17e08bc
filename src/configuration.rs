use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::integration::integrationerror::IntegrationError;
use crate::integration::integrationinput::IntegrationInputBuilder;
use crate::integration::precisionintegrator::{
    IntegralResult,
    PrecisionIntegrator
};
use crate::manager::manager::Manager;
use crate::manager::managererror::{
    ManagerError,
    parse_json_value
};
use crate::math::function::elementary::{
    Exponential,
    Sine
};
use crate::math::function::integrand::Integrand;
use crate::math::function::polynomial::Polynomial;
use crate::math::function::univariatefunction::ValueOf;
use crate::math::interval::Interval;
use crate::math::optimize::boundedmaximizer::MaximizerSettings;
use crate::reference::simpsonintegrator::{
    ReferenceError,
    ReferenceIntegral,
    SimpsonIntegrator
};

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Manager(#[from] ManagerError),

    #[error(transparent)]
    Integration(#[from] IntegrationError),

    #[error("job index {index} out of range ({len} jobs configured)")]
    JobIndexOutOfRange { index: usize, len: usize }
}

// ─────────────────────────────────────────────────────────────────────────────
// Integrand JSON props
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
enum IntegrandType {
    Polynomial,
    Sine,
    Exponential
}

#[derive(Deserialize)]
struct IntegrandTypedObject {
    integrand_type: IntegrandType
}

#[derive(Deserialize)]
struct PolynomialJsonProp {
    coefficients: Vec<f64>
}

#[derive(Deserialize)]
struct SineJsonProp {
    #[serde(default = "default_one")]
    amplitude: f64,
    #[serde(default = "default_one")]
    frequency: f64
}

#[derive(Deserialize)]
struct ExponentialJsonProp {
    #[serde(default = "default_one")]
    amplitude: f64,
    rate: f64
}

fn default_one() -> f64 {
    1.0
}

fn require_finite(values: &[f64], what: &str) -> Result<(), ManagerError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ManagerError::InvalidValueError(format!("{} must be finite", what)))
    }
}

fn get_integrand_from_json(json_value: serde_json::Value) -> Result<Arc<Integrand>, ManagerError> {
    let typed_obj: IntegrandTypedObject = parse_json_value(json_value.clone())?;
    let integrand = match typed_obj.integrand_type {
        IntegrandType::Polynomial => {
            let prop: PolynomialJsonProp = parse_json_value(json_value)?;
            require_finite(&prop.coefficients, "polynomial coefficients")?;
            Integrand::from(Polynomial::new(prop.coefficients))
        },
        IntegrandType::Sine => {
            let prop: SineJsonProp = parse_json_value(json_value)?;
            require_finite(&[prop.amplitude, prop.frequency], "sine parameters")?;
            Integrand::from(Sine::new(prop.amplitude, prop.frequency))
        },
        IntegrandType::Exponential => {
            let prop: ExponentialJsonProp = parse_json_value(json_value)?;
            require_finite(&[prop.amplitude, prop.rate], "exponential parameters")?;
            Integrand::from(Exponential::new(prop.amplitude, prop.rate))
        }
    };
    Ok(Arc::new(integrand))
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// One integral to compute: which integrand, over what, to which precision.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntegrationJob {
    integrand: String,
    interval: Interval,
    precision: f64
}

impl IntegrationJob {
    pub fn new(integrand: String, interval: Interval, precision: f64) -> IntegrationJob {
        IntegrationJob { integrand, interval, precision }
    }

    pub fn integrand(&self) -> &str {
        &self.integrand
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }
}

/// Result of one job, with the Simpson value for comparison.
#[derive(Debug, Clone)]
pub struct JobReport {
    pub job: IntegrationJob,
    pub result: IntegralResult,
    pub reference: Result<ReferenceIntegral, ReferenceError>
}

impl JobReport {
    /// `estimate - reference`, if the reference converged.
    pub fn deviation(&self) -> Option<f64> {
        self.reference
            .as_ref()
            .ok()
            .map(|reference| self.result.estimate - reference.value)
    }
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    integrands: Vec<serde_json::Value>,
    #[serde(default)]
    jobs: Vec<IntegrationJob>,
    #[serde(default)]
    maximizer: MaximizerSettings
}

pub struct Configuration {
    integrand_manager: Manager<Arc<Integrand>>,
    jobs: Vec<IntegrationJob>,
    maximizer_settings: MaximizerSettings
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            integrand_manager: Manager::new(get_integrand_from_json),
            jobs: Vec::new(),
            maximizer_settings: MaximizerSettings::default()
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)
            .map_err(ManagerError::JsonParseError)?;
        let mut config = Configuration::new();
        config.integrand_manager.insert_obj_from_json_vec(&json_prop.integrands)?;
        config.jobs = json_prop.jobs;
        config.maximizer_settings = json_prop.maximizer;
        tracing::info!(
            integrands = config.integrand_manager.len(),
            jobs = config.jobs.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path).map_err(ManagerError::IOError)?;
        Configuration::from_reader(BufReader::new(file))
    }

    pub fn integrand_manager(&self) -> &Manager<Arc<Integrand>> {
        &self.integrand_manager
    }

    pub fn integrand(&self, name: &str) -> Result<Arc<Integrand>, ConfigurationError> {
        Ok(self.integrand_manager.get(name)?)
    }

    pub fn jobs(&self) -> &[IntegrationJob] {
        &self.jobs
    }

    pub fn job(&self, index: usize) -> Result<&IntegrationJob, ConfigurationError> {
        self.jobs.get(index).ok_or(ConfigurationError::JobIndexOutOfRange {
            index,
            len: self.jobs.len()
        })
    }

    pub fn maximizer_settings(&self) -> &MaximizerSettings {
        &self.maximizer_settings
    }

    pub fn run_job(&self,
                   job: &IntegrationJob,
                   integrator: &PrecisionIntegrator) -> Result<JobReport, ConfigurationError> {
        let integrand = self.integrand(job.integrand())?;
        let input = IntegrationInputBuilder::new()
            .interval(job.interval)
            .precision(job.precision)
            .differentiable(integrand.as_ref())
            .build()?;
        let result = integrator.compute(&input)?;
        let reference = SimpsonIntegrator::default()
            .integrate(&ValueOf::new(integrand.as_ref()), job.interval());
        Ok(JobReport { job: job.clone(), result, reference })
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::function::univariatefunction::DifferentiableFunction;

    const CONFIG: &str = r#"{
        "integrands": [
            { "name": "square", "integrand_type": "Polynomial", "coefficients": [0, 0, 1] },
            { "name": "wave", "integrand_type": "Sine", "amplitude": 2.0, "frequency": 3.0 },
            { "name": "growth", "integrand_type": "Exponential", "rate": 0.5 }
        ],
        "jobs": [
            { "integrand": "square", "interval": [0, 1], "precision": 0.01 },
            { "integrand": "growth", "interval": [0, 2], "precision": 0.001 }
        ],
        "maximizer": { "max_evaluations": 200 }
    }"#;

    #[test]
    fn test_from_reader() {
        let config = Configuration::from_reader(CONFIG.as_bytes()).unwrap();
        assert_eq!(config.integrand_manager().len(), 3);
        assert_eq!(config.jobs().len(), 2);
        assert_eq!(config.maximizer_settings().max_evaluations, 200);
        assert_eq!(config.maximizer_settings().relative_tolerance, 1e-3);

        let wave = config.integrand("wave").unwrap();
        assert_eq!(*wave, Integrand::Sine(Sine::new(2.0, 3.0)));
        assert!((wave.derivative(0.0) - 6.0).abs() < 1e-15);

        let growth = config.integrand("growth").unwrap();
        assert_eq!(growth.value(0.0), 1.0);
    }

    #[test]
    fn test_unknown_integrand_and_job() {
        let config = Configuration::from_reader(CONFIG.as_bytes()).unwrap();
        assert!(matches!(
            config.integrand("cube"),
            Err(ConfigurationError::Manager(ManagerError::NameNotFoundError(_)))
        ));
        assert!(matches!(
            config.job(5),
            Err(ConfigurationError::JobIndexOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn test_rejects_bad_documents() {
        let unknown_type = r#"{ "integrands": [ { "name": "x", "integrand_type": "Bessel" } ] }"#;
        assert!(Configuration::from_reader(unknown_type.as_bytes()).is_err());

        let reversed = r#"{ "integrands": [], "jobs": [ { "integrand": "x", "interval": [1, 0], "precision": 0.1 } ] }"#;
        assert!(Configuration::from_reader(reversed.as_bytes()).is_err());

        let missing = r#"{ "jobs": [] }"#;
        assert!(Configuration::from_reader(missing.as_bytes()).is_err());
    }

    #[test]
    fn test_run_job() {
        let config = Configuration::from_reader(CONFIG.as_bytes()).unwrap();
        let integrator = PrecisionIntegrator::default();
        let report = config.run_job(config.job(0).unwrap(), &integrator).unwrap();
        assert!(report.result.partitions >= 97 && report.result.partitions <= 100);
        assert!((report.result.estimate - 1.0 / 3.0).abs() <= 0.01);
        let reference = report.reference.as_ref().unwrap();
        assert!((reference.value - 1.0 / 3.0).abs() < 1e-12);
        assert!(report.deviation().unwrap() > 0.0);
    }

    #[test]
    fn test_run_job_propagates_invalid_precision() {
        let config = Configuration::from_reader(CONFIG.as_bytes()).unwrap();
        let job = IntegrationJob::new("square".to_owned(), Interval::new(0.0, 1.0).unwrap(), 0.0);
        let result = config.run_job(&job, &PrecisionIntegrator::default());
        assert!(matches!(
            result,
            Err(ConfigurationError::Integration(IntegrationError::InvalidPrecision(_)))
        ));
    }
}

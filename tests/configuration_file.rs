use std::io::Write;
use std::path::Path;

use quadbound::configuration::{
    Configuration,
    ConfigurationError
};
use quadbound::manager::managererror::ManagerError;
use quadbound::PrecisionIntegrator;

#[test]
fn test_bundled_config_runs_every_job() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("json/config.json");
    let config = Configuration::from_file(&path).unwrap();
    assert_eq!(config.jobs().len(), 4);

    let integrator = PrecisionIntegrator::with_settings(
        Box::new(quadbound::math::optimize::brentmaximizer::BrentMaximizer::new()),
        *config.maximizer_settings()
    );
    for job in config.jobs() {
        let report = config.run_job(job, &integrator).unwrap();
        let integrand = config.integrand(job.integrand()).unwrap();
        let exact = integrand.exact_integral(job.interval().lo(), job.interval().hi());
        if report.result.partition_estimate.is_saturated() {
            continue;
        }
        assert!(
            (report.result.estimate - exact).abs() <= job.precision(),
            "job {} missed its precision",
            job.integrand()
        );
    }
}

#[test]
fn test_missing_file() {
    let result = Configuration::from_file("/definitely/not/here.json");
    assert!(matches!(
        result,
        Err(ConfigurationError::Manager(ManagerError::IOError(_)))
    ));
}

#[test]
fn test_duplicate_integrand_names() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "integrands": [
            {{ "name": "f", "integrand_type": "Polynomial", "coefficients": [1] }},
            {{ "name": "f", "integrand_type": "Polynomial", "coefficients": [2] }}
        ] }}"#
    ).unwrap();
    let result = Configuration::from_file(file.path());
    assert!(matches!(
        result,
        Err(ConfigurationError::Manager(ManagerError::DuplicateNameError(_)))
    ));
}

#[test]
fn test_non_finite_coefficients_rejected() {
    let config = r#"{ "integrands": [ { "name": "f", "integrand_type": "Sine", "amplitude": 1e400 } ] }"#;
    assert!(Configuration::from_reader(config.as_bytes()).is_err());
}

use crate::core::report::{generate_report_with, LiabilityReport};
use crate::domain::ports::ProfileSource;
use crate::utils::error::{ExposureError, Result};

/// Drives a calculation run: pulls profiles from a source, refuses any
/// without measurements, and produces one report per profile.
pub struct ExposureEngine<S: ProfileSource> {
    source: S,
}

impl<S: ProfileSource> ExposureEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn run(&self) -> Result<Vec<LiabilityReport>> {
        tracing::info!("Loading utility profiles");
        let profiles = self.source.profiles()?;
        let options = self.source.report_options();
        tracing::debug!("Report options: {:?}", options);

        // Checked up front so no report is produced when any profile is unusable.
        if let Some(empty) = profiles.iter().find(|p| p.measurements().is_empty()) {
            return Err(ExposureError::NoMeasurements {
                utility: empty.name().to_string(),
            });
        }

        let reports: Vec<LiabilityReport> = profiles
            .iter()
            .map(|profile| {
                let report = generate_report_with(profile, &options);
                tracing::debug!(
                    "{}: compliant={}, regulatory={:.0}, treatment={:.0}, total mid={:.0}",
                    profile.name(),
                    report.compliance_status,
                    report.regulatory_penalties.total,
                    report.treatment_costs.total,
                    report.total_exposure.mid
                );
                report
            })
            .collect();

        tracing::info!("Generated {} report(s)", reports.len());
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::ReportOptions;
    use crate::domain::model::{Measurement, UtilityProfile};
    use crate::domain::reference::{Compound, Technology};

    struct StaticSource {
        profiles: Vec<UtilityProfile>,
        options: ReportOptions,
    }

    impl ProfileSource for StaticSource {
        fn profiles(&self) -> Result<Vec<UtilityProfile>> {
            Ok(self.profiles.clone())
        }

        fn report_options(&self) -> ReportOptions {
            self.options
        }
    }

    fn utility(name: &str, measurements: Vec<Measurement>) -> UtilityProfile {
        UtilityProfile::new(name, 50_000, 5.0, measurements)
    }

    #[test]
    fn test_run_produces_one_report_per_profile() {
        let engine = ExposureEngine::new(StaticSource {
            profiles: vec![
                utility("North", vec![Measurement::new(Compound::Pfoa, 20.0)]),
                utility("South", vec![Measurement::new(Compound::Pfos, 2.0)]),
            ],
            options: ReportOptions::default(),
        });

        let reports = engine.run().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].utility.name, "North");
        assert!(!reports[0].compliance_status);
        assert!(reports[1].compliance_status);
    }

    #[test]
    fn test_run_refuses_profile_without_measurements() {
        let engine = ExposureEngine::new(StaticSource {
            profiles: vec![
                utility("North", vec![Measurement::new(Compound::Pfoa, 20.0)]),
                utility("Dry", vec![]),
            ],
            options: ReportOptions::default(),
        });

        match engine.run() {
            Err(ExposureError::NoMeasurements { utility }) => assert_eq!(utility, "Dry"),
            other => panic!("expected NoMeasurements, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_run_applies_source_options() {
        let engine = ExposureEngine::new(StaticSource {
            profiles: vec![utility("North", vec![Measurement::new(Compound::Pfoa, 20.0)])],
            options: ReportOptions {
                technology: Technology::Novel,
                ..ReportOptions::default()
            },
        });

        let reports = engine.run().unwrap();
        assert_eq!(reports[0].treatment_costs.technology, Technology::Novel);
    }
}

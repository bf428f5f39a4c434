use std::io::Write;
use tempfile::Builder;
use trainstat::{import, read_package, write_report, ActivityKind, PackageError, ReportFormat};
use trainstat::models::WorkoutPackage;
use trainstat::report::process_packages;

/// Integration tests that run packages through selection, summary and export

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_running_reference_values() {
        let info = read_package("RUN", &[15000.0, 1.0, 75.0])
            .unwrap()
            .show_training_info();

        assert_eq!(info.training_type, ActivityKind::Running);
        assert!(approx(info.distance, 9.75));
        assert!(approx(info.speed, 9.75));
        assert!(approx(info.calories, (18.0 * 9.75 - 20.0) * 75.0 / 1000.0 * 60.0));
    }

    #[test]
    fn test_swimming_reference_values() {
        let info = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
            .unwrap()
            .show_training_info();

        assert!(approx(info.speed, 1.0));
        assert!(approx(info.distance, 0.9936));
        assert!(approx(info.calories, 336.0));
    }

    #[test]
    fn test_walking_reference_values() {
        let info = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0])
            .unwrap()
            .show_training_info();

        assert!(approx(info.speed, 5.85));
        // 5.85^2 = 34.2225, floor(34.2225 / 180) = 0
        assert!(approx(info.calories, (0.035 * 75.0 + 0.0 * 0.029 * 75.0) * 60.0));
    }

    #[test]
    fn test_selector_errors() {
        assert!(matches!(
            read_package("XYZ", &[15000.0, 1.0, 75.0]),
            Err(PackageError::UnknownActivityKind { .. })
        ));
        assert!(matches!(
            read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]),
            Err(PackageError::ArityMismatch { expected: 3, actual: 4, .. })
        ));
    }

    #[test]
    fn test_csv_file_to_text_report() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "code,action,duration,weight").unwrap();
        writeln!(file, "SWM,720,1,80,25,40").unwrap();
        writeln!(file, "XYZ,1,2,3").unwrap();
        writeln!(file, "RUN,15000,1,75").unwrap();
        writeln!(file, "WLK,9000,1,75,180").unwrap();

        let packages = import::import_file(file.path()).unwrap();
        let report = process_packages(&packages);
        assert_eq!(report.success_count(), 3);
        assert_eq!(report.failure_count(), 1);

        let mut out = Vec::new();
        write_report(&report, ReportFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories burned: 336.000.\n\
             Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750.\n\
             Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 157.500.\n"
        );
    }

    #[test]
    fn test_json_file_to_json_report() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"code": "RUN", "data": [15000, 1, 75]}}, {{"code": "WLK", "data": [9000, 1]}}]"#
        )
        .unwrap();

        let packages = import::import_file(file.path()).unwrap();
        assert_eq!(packages[0], WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]));

        let report = process_packages(&packages);
        let mut out = Vec::new();
        write_report(&report, ReportFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["entries"][0]["code"], "RUN");
        assert!(value["entries"][1]["outcome"]["failed"]
            .as_str()
            .unwrap()
            .contains("WLK packages need 4 values"));
    }
}

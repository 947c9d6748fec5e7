use carebook::services::{AppointmentService, DoctorService, PatientService};

// The backend treats the literal "null" path segment as "no constraint";
// a fully blank filter request must therefore land on the same path the
// unconstrained query uses.

#[test]
fn all_blank_doctor_filters_hit_the_unconstrained_path() {
    let blank = DoctorService::filter_path("", "", "");
    assert_eq!(blank, "/doctor/filter/null/null/null");

    // Whitespace-only input counts as blank too.
    assert_eq!(DoctorService::filter_path("  ", "\t", "   "), blank);
}

#[test]
fn partial_doctor_filters_keep_only_supplied_segments() {
    assert_eq!(
        DoctorService::filter_path("Dr. A", "", ""),
        "/doctor/filter/Dr. A/null/null"
    );
    assert_eq!(
        DoctorService::filter_path("", "AM", "ENT"),
        "/doctor/filter/null/AM/ENT"
    );
}

#[test]
fn appointment_filters_normalize_the_same_way() {
    assert_eq!(
        PatientService::filter_path("", "", "tok"),
        "/patient/filter/null/null/tok"
    );
    assert_eq!(
        PatientService::filter_path("future", " ", "tok"),
        "/patient/filter/future/null/tok"
    );
}

#[test]
fn doctor_dashboard_query_normalizes_the_name_only() {
    assert_eq!(
        AppointmentService::doctor_query("2026-08-05", "", "tok"),
        "/doctor-appointments?date=2026-08-05&name=null&token=tok"
    );
    assert_eq!(
        AppointmentService::doctor_query("2026-08-05", "  Pat ", "tok"),
        "/doctor-appointments?date=2026-08-05&name=Pat&token=tok"
    );
}

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::ui::views::{
    AdminDashboard, DoctorDashboard, Home, LoggedPatientDashboard, PatientAppointments,
    PatientDashboard,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/admin")]
    AdminDashboard {},

    #[route("/doctor")]
    DoctorDashboard {},

    #[route("/patient")]
    PatientDashboard {},

    #[route("/patient/home")]
    LoggedPatientDashboard {},

    #[route("/patient/appointments")]
    PatientAppointments {},
}

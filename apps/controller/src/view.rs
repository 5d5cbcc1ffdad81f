//! Text rendering of the operator view.

use client_core::ClientViewState;

pub fn current_azimuth_line(value: i64) -> String {
    format!("Current Azimuth   : {value}°")
}

pub fn new_azimuth_line(value: i64) -> String {
    format!("New Azimuth       : {value}°")
}

pub fn current_elevation_line(value: i64) -> String {
    format!("Current Elevation : {value}°")
}

pub fn new_elevation_line(value: i64) -> String {
    format!("New Elevation     : {value}°")
}

pub fn render(view: &ClientViewState) -> String {
    [
        current_azimuth_line(view.cached_current.azimuth),
        new_azimuth_line(view.pending.azimuth),
        current_elevation_line(view.cached_current.elevation),
        new_elevation_line(view.pending.elevation),
    ]
    .join("\n")
}

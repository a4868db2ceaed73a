/// Current month key ("YYYY-MM") in local time.
#[cfg(target_arch = "wasm32")]
pub fn current_month() -> String {
    let date = js_sys::Date::new_0();
    // js getMonth is zero-based
    format!("{:04}-{:02}", date.get_full_year(), date.get_month() + 1)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_month() -> String {
    chrono::Local::now().format("%Y-%m").to_string()
}

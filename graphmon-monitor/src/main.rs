fn main() -> Result<(), eframe::Error> {
    graphmon_monitor::run()
}

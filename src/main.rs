use log::LevelFilter;
use unisim_campus::components::App;
use unisim_campus::util::init_logging;

fn main() {
    console_error_panic_hook::set_once();
    init_logging(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    log::info!("starting campus");
    yew::Renderer::<App>::new().render();
}

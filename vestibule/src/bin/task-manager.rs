use color_eyre::eyre;
use vestibule::Application;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> eyre::Result<()> {
    vestibule::cli::start(Application::TaskManager)
}

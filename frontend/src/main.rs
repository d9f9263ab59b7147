use leptos::prelude::*;
use tasklane::log_info;
use tasklane_frontend::App;

// 单线程 wasm，使用 lol_alloc 以减小体积
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: lol_alloc::AssumeSingleThreaded<lol_alloc::FreeListAllocator> =
    unsafe { lol_alloc::AssumeSingleThreaded::new(lol_alloc::FreeListAllocator::new()) };

fn main() {
    // 挂载前安装，组件初始化中的 panic 也能输出到控制台
    console_error_panic_hook::set_once();
    log_info!("[App] Mounting tasklane {}", env!("CARGO_PKG_VERSION"));
    mount_to_body(App);
}

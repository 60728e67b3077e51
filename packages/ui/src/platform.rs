use std::sync::Arc;

use store::SessionStore;

/// Platform session store: browser `localStorage` on the web, a
/// process-wide in-memory map elsewhere (native dev shells).
pub fn session_store() -> Arc<dyn SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static NATIVE: OnceLock<store::MemoryStore> = OnceLock::new();
        Arc::new(NATIVE.get_or_init(store::MemoryStore::new).clone())
    }
}

/// Platform sleep used by the polling loops.
pub async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}

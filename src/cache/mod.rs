pub mod object_cache;
pub mod register;
mod traits;

pub use traits::{CacheResult, ObjectCache, get_json, insert_json};

/// 声明缓存插件，进程加载时自动注册到插件表
///
/// 插件类型需提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ty) => {
        #[ctor::ctor]
        unsafe fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$plugin>::new()
                            .map_err($crate::errors::DojoSystemError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                }),
            );
        }
    };
}

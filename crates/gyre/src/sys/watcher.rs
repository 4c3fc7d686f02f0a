use crate::events::AppEvent;
use async_channel::Sender;
use gyre_core::config::get_config_path;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                if is_config_change(&event, &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

fn is_config_change(event: &notify::Event, config_path: &std::path::Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind};
    use std::path::PathBuf;

    #[test]
    fn test_only_config_writes_trigger_reload() {
        let config = PathBuf::from("/home/u/.config/gyre/config.toml");
        let other = PathBuf::from("/home/u/.config/gyre/notes.txt");

        let modify = notify::Event::new(EventKind::Modify(ModifyKind::Any)).add_path(config.clone());
        let create = notify::Event::new(EventKind::Create(CreateKind::File)).add_path(config.clone());
        let access = notify::Event::new(EventKind::Access(AccessKind::Any)).add_path(config.clone());
        let elsewhere = notify::Event::new(EventKind::Modify(ModifyKind::Any)).add_path(other);

        assert!(is_config_change(&modify, &config));
        assert!(is_config_change(&create, &config));
        assert!(!is_config_change(&access, &config));
        assert!(!is_config_change(&elsewhere, &config));
    }
}

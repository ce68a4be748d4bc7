use crate::session::{FileStore, SessionStore};

pub fn execute() -> anyhow::Result<()> {
    let store = FileStore::new()?;

    match store.load() {
        Some(session) => {
            store.clear()?;
            println!("Signed out {}.", session.display_name());
        }
        None => println!("Not signed in."),
    }

    Ok(())
}

use anyhow::Result;
use heatloss::{read_vfs, write_vfs, Room};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heatloss=debug".into()),
        )
        .init();

    let mut room = Room::new(3.0, 4.0, 5.0)?;
    room.set_room_temperature(25.0)?;
    room.set_wall_uvalues([20.0, 5.0, 5.0, 5.0, 5.0, 10.0])?;
    println!("heat loss: {} W", room.heat_loss());

    room.set_width(10.0)?;
    println!("heat loss after widening: {} W", room.heat_loss());

    // Round-trip the model through a VFS file
    let dir = tempfile::tempdir()?;
    let path = write_vfs(&dir.path().join("room"), &room)?;
    let loaded = read_vfs(&path)?;
    println!("round-tripped heat loss: {} W", loaded.heat_loss());

    Ok(())
}

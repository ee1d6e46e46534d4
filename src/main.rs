//! courier-docs binary - mount the browser and run the event loop.

use std::io;

use courier_docs::pipeline;

fn main() -> io::Result<()> {
    let handle = pipeline::mount()?;
    pipeline::run(&handle)?;
    handle.unmount();
    Ok(())
}

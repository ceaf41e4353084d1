//! Project initialization command

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn run(name: &str) -> Result<()> {
    let project_dir = Path::new(name);

    if project_dir.exists() {
        anyhow::bail!("Directory '{}' already exists", name);
    }

    // Create directory structure
    fs::create_dir_all(project_dir.join("catalog/modules"))?;
    fs::create_dir_all(project_dir.join("catalog/sections"))?;

    fs::write(
        project_dir.join("catalog/catalog.toml"),
        r#"# Which two units measure a module's spatial footprint.
# Footprint usage is checked against the room boundary envelope.
[footprint]
x_unit = "Space_X"
y_unit = "Space_Y"
"#,
    )?;

    // Create sample module definitions
    fs::write(
        project_dir.join("catalog/modules/power.toml"),
        r#"[[module]]
name = "Transformer_100"

[[module.effect]]
unit = "Grid_Connection"
amount = 1
input = true

[[module.effect]]
unit = "Space_X"
amount = 40

[[module.effect]]
unit = "Space_Y"
amount = 20

[[module.effect]]
unit = "Usable_Power"
amount = 100
output = true

[[module.effect]]
unit = "Price"
amount = 12000
output = true
"#,
    )?;

    fs::write(
        project_dir.join("catalog/modules/compute.toml"),
        r#"[[module]]
name = "Server_Rack"

[[module.effect]]
unit = "Usable_Power"
amount = 25
input = true

[[module.effect]]
unit = "Space_X"
amount = 10

[[module.effect]]
unit = "Space_Y"
amount = 10

[[module.effect]]
unit = "Processing"
amount = 400
output = true

[[module.effect]]
unit = "Price"
amount = 30000
output = true
"#,
    )?;

    // Create sample constraint definitions
    fs::write(
        project_dir.join("catalog/sections/server_square.toml"),
        r#"# Constraints for the Server_Square section, checked by `rackplan validate`

[[constraint]]
section = "Server_Square"
unit = "Space_X"
below = true
amount = 1000

[[constraint]]
section = "Server_Square"
unit = "Space_Y"
below = true
amount = 500

[[constraint]]
section = "Server_Square"
unit = "Processing"
above = true
amount = 1000

[[constraint]]
section = "Server_Square"
unit = "Usable_Power"
above = true
amount = 0
"#,
    )?;

    fs::write(
        project_dir.join("catalog/sections/global.toml"),
        r#"# Facility-wide constraints (no section = global scope)

[[constraint]]
unit = "Price"
minimize = true

[[constraint]]
unit = "Grid_Connection"
above = true
amount = -4
"#,
    )?;

    // Create an empty layout with a rectangular room
    fs::write(
        project_dir.join("layout.toml"),
        r#"[layout]
name = "New Data Center"
version = "1.0"
active_surface = "website"

[boundary]
points = [{ x = 0, y = 0 }, { x = 1000, y = 0 }, { x = 1000, y = 500 }, { x = 0, y = 500 }]
"#,
    )?;

    println!("Created rackplan project: {}", name);
    println!();
    println!("Project structure:");
    println!("  {}/", name);
    println!("  ├── catalog/");
    println!("  │   ├── catalog.toml");
    println!("  │   ├── modules/");
    println!("  │   │   ├── power.toml");
    println!("  │   │   └── compute.toml");
    println!("  │   └── sections/");
    println!("  │       ├── server_square.toml");
    println!("  │       └── global.toml");
    println!("  └── layout.toml");
    println!();
    println!("Next steps:");
    println!("  cd {}", name);
    println!("  rackplan place add Server_Rack --section Server_Square --at 100,100");
    println!("  rackplan validate");

    Ok(())
}

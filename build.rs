use std::path::Path;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=tailwind.css");
    println!("cargo:rerun-if-changed=src/ui");

    let root = env!("CARGO_MANIFEST_DIR");
    if !Path::new(root).join("tailwind.css").exists() {
        println!("cargo:warning=tailwind.css not found, keeping assets/tailwind.css as is");
        return;
    }

    // Regenerate the stylesheet from the classes used in src/ui (locally installed tailwind)
    let output = Command::new("npx")
        .arg("tailwindcss")
        .args(["-i", "tailwind.css", "-o", "assets/tailwind.css", "--minify"])
        .current_dir(root)
        .output();

    match output {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            println!("cargo:warning=Failed to generate Tailwind CSS, using the checked-in build");
            println!(
                "cargo:warning=STDERR: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Err(e) => {
            println!("cargo:warning=Failed to run tailwindcss: {}", e);
        }
    }
}

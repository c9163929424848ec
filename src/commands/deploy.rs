//! Deploy command implementation
//!
//! Recreates the deploy root, loads module descriptors from the modules
//! directory, then stages both source roots (modules first, then application
//! sources) into the deploy root.

use console::Style;

use crate::cli::DeployArgs;
use crate::deployer::{self, DeployOptions};
use crate::error::Result;
use crate::manifest::{self, ModuleDescriptor};

/// Run deploy command
pub fn run(args: DeployArgs, verbose: bool) -> Result<()> {
    let options = DeployOptions {
        rewrite_imports: !args.no_rewrite,
        verbose,
    };

    deployer::prepare_deploy_root(&args.deploy_dir)?;

    let modules = manifest::load_modules(&args.modules_dir)?;
    print_module_summary(&modules);

    deployer::deploy_files(&args.deploy_dir, &args.modules_dir, &modules, options)?;
    deployer::deploy_files(&args.deploy_dir, &args.source_dir, &modules, options)?;

    println!(
        "{} {}",
        Style::new().bold().green().apply_to("Deployed to"),
        args.deploy_dir.display()
    );

    Ok(())
}

/// Print the module mapping summary (cosmetic, not a contract surface)
fn print_module_summary(modules: &[ModuleDescriptor]) {
    if modules.is_empty() {
        println!("No modules found.");
        return;
    }

    println!("Modules ({}):", modules.len());
    for module in modules {
        println!(
            "  {} -> {}",
            Style::new().bold().yellow().apply_to(&module.name),
            module.main
        );
    }
    println!();
}

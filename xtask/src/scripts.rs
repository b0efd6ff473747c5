use std::error::Error;

use bunt::println;
use duct::cmd;

use crate::cli;
use crate::utils;

pub fn build(args: &cli::BuildArgs) -> Result<(), Box<dyn Error>> {
    let mut arguments = vec!["build", "--bin", &args.name];

    if args.release {
        arguments.push("--release");
    }

    cmd("cargo", arguments).run()?;

    Ok(())
}

pub fn test(args: &cli::TestArgs) -> Result<(), Box<dyn Error>> {
    let mut arguments = vec!["test", "--workspace"];

    if let Some(filter) = &args.filter {
        arguments.push(filter);
    }

    cmd("cargo", arguments).run()?;

    Ok(())
}

fn release(name: &str) -> Result<String, Box<dyn Error>> {
    build(&cli::BuildArgs {
        name: name.to_string(),
        release: true,
    })?;

    Ok(format!("target/release/{name}"))
}

pub fn install(args: &cli::InstallArgs) -> Result<(), Box<dyn Error>> {
    let target_path = release(&args.name)?;

    println!("{$magenta}Installing {[yellow]} into {[yellow]}{/$}", &args.name, &args.path);
    cmd!("cp", &target_path, &args.path).run()?;
    cmd!("chmod", "+x", &args.path).run()?;

    Ok(())
}

pub fn github(args: &cli::GithubArgs) -> Result<(), Box<dyn Error>> {
    let target_path = release(&args.name)?;

    let version = utils::create_tag();
    let notes = format!("Release notes for {version}");

    println!("{$magenta}Creating {[yellow]} tag{/$}", &version);
    cmd!("git", "tag", "-a", &version, "-m", &version).run()?;
    println!("{$magenta}Pushing {[yellow]} tag{/$}", &version);
    cmd!("git", "push", "origin", &version).run()?;
    println!("{$magenta}Creating {[yellow]} release{/$}", &version);
    cmd!("gh", "release", "create", &version, "--title", &version, "--notes", &notes).run()?;
    println!("{$magenta}Uploading {[yellow]} release binary{/$}", &version);
    cmd!("gh", "release", "upload", &version, &target_path, "--clobber").run()?;

    Ok(())
}

use std::fs;

fn main() {
    // 读取 VERSION 文件
    let version = fs::read_to_string("VERSION")
        .expect("Failed to read VERSION file")
        .trim()
        .to_string();

    // 两个二进制共用同一个版本号
    println!("cargo:rustc-env=APP_VERSION={}", version);

    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-changed=embedded/templates");
}

use bls::{Keypair, PublicKey, SchemeConfig, Signature, message_digest};
use curve::{G1Affine, G2Affine};

fn print_g1(name: &str, point: &G1Affine) {
    println!("{name}:");
    println!("  X = {}", point.x);
    println!("  Y = {}\n", point.y);
}

fn print_g2(name: &str, point: &G2Affine) {
    println!("{name}:");
    println!("  X = [{}, {}]", point.x.c0, point.x.c1);
    println!("  Y = [{}, {}]\n", point.y.c0, point.y.c1);
}

fn main() {
    tracing_subscriber::fmt::init();

    let config = SchemeConfig::default();
    let mut rng = rand::rng();
    let keypair = Keypair::generate(&mut rng).expect("keygen");
    println!(
        "Private Key (sk): 0x{}\n",
        hex::encode(keypair.secret.to_be_bytes())
    );

    let msg = b"test message";
    let msg_hash = config.hash_to_curve.hash(msg).expect("hash to curve");
    let sig = keypair.sign(&config, msg).expect("sign");

    let pk_bytes = bincode::serialize(&keypair.public).expect("serialize pk");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");
    let pk: PublicKey = bincode::deserialize(&pk_bytes).expect("deserialize pk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    let ok = pk.verify(&config, msg, &sig2).expect("verify");
    assert!(ok, "pairing check failed");

    print_g1("G1 Public Key", &pk.g1);
    print_g2("G2 Public Key", &pk.g2);
    println!("Message Hash (in bytes) {}", hex::encode(message_digest(msg)));
    print_g1("Message Hash (in G1)", &msg_hash);
    print_g1("Signature", sig2.point());
}

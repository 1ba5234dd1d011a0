use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use argh::FromArgs;
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};

use cifar_aug::image::{Dataset, Sample};
use cifar_aug::imgproc::{
    augment::{apply_op, sample_schedule, AugmentOp},
    RandomSource, RngSource,
};
use cifar_aug::io::{cifar, png};

#[derive(FromArgs, Debug)]
/// Augment the CIFAR-10 training set with one random transform per image.
struct Args {
    /// path to the cifar-10-batches-bin directory
    #[argh(
        option,
        short = 'd',
        default = "PathBuf::from(\"cifar-10-batches-bin\")"
    )]
    data_dir: PathBuf,

    /// directory receiving the archives and the example images
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// seed of the random generator, taken from the OS when absent
    #[argh(option, short = 's')]
    seed: Option<u64>,

    /// augment only the first N training images
    #[argh(option, short = 'n')]
    limit: Option<usize>,

    /// file receiving a copy of the log
    #[argh(option, default = "PathBuf::from(\"dataset.log\")")]
    log_file: PathBuf,
}

/// Duplicates the log records to stdout and to the log file.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

fn init_logging(log_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(log_file)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(env_logger::Target::Pipe(Box::new(Tee { file })))
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    init_logging(&args.log_file)?;
    fs::create_dir_all(&args.output_dir)?;

    let mut rng = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_os_rng(),
    };

    // 1. load the dataset
    log::info!("## 1. Loading the dataset");

    let splits = cifar::load_cifar10(&args.data_dir)?;

    log::info!("Size of train dataset: {}", splits.train.len());
    log::info!("Size of test dataset: {}", splits.test.len());
    log::info!("Labels in CIFAR-10 dataset: {:?}", splits.label_names);

    log::info!("Writing unaugmented dataset");
    cifar::write_cifar_batch(
        args.output_dir.join("unaugmented_dataset.bin"),
        &splits.train,
    )?;

    log::info!("Writing test dataset");
    cifar::write_cifar_batch(args.output_dir.join("test_dataset.bin"), &splits.test)?;

    // 2. show every transformation on a random example
    log::info!("## 2. Image transformations");

    let example_idx = rng.int_inclusive(0, splits.train.len() as i64 - 1) as usize;
    let example = &splits.train.samples[example_idx];

    log::info!(
        "Label of example image: {} ({})",
        example.label,
        splits.label_name(example.label).unwrap_or("unknown")
    );
    log::info!("Matrix shape of example image: {:?}", example.image.shape());

    png::write_image_png_rgb8(args.output_dir.join("example.png"), &example.image)?;
    for op in AugmentOp::ALL {
        let transformed = apply_op(op, &example.image, &mut rng)?;
        let file_name = format!("example_{}.png", op.name());
        png::write_image_png_rgb8(args.output_dir.join(file_name), &transformed)?;
    }

    log::info!("Example image and its transformation images have been saved as .png files");

    // 3. augment the training set
    log::info!("## 3. Generating augmented training dataset");

    let mut train = splits.train;
    if let Some(limit) = args.limit {
        train.truncate(limit);
    }

    let schedule = sample_schedule(train.len(), &mut rng)?;
    let mut op_counts = [0usize; 4];

    let pb = ProgressBar::new(train.len() as u64);
    pb.set_style(ProgressStyle::default_bar().template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} ({eta}) {msg} {per_sec}",
    )?.progress_chars("##>-"));

    let mut augmented = Vec::with_capacity(train.len());
    for (sample, op) in train.iter().zip(schedule).progress_with(pb) {
        augmented.push(Sample {
            image: apply_op(op, &sample.image, &mut rng)?,
            label: sample.label,
        });
        op_counts[op.index()] += 1;
    }
    let augmented = Dataset::new(augmented);

    for op in AugmentOp::ALL {
        log::info!("Images augmented with {}: {}", op, op_counts[op.index()]);
    }
    log::info!("Size of augmented train dataset: {}", augmented.len());

    log::info!("Writing augmented dataset");
    cifar::write_cifar_batch(args.output_dir.join("augmented_dataset.bin"), &augmented)?;

    Ok(())
}

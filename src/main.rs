use std::{error::Error, sync::Arc, time::Instant};

use pathtracer::{Camera, CameraConfig, Color, Hit, Material, Point, Sphere, World};

const SEED: u64 = 0x5eed;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let world = demo_scene()?;
    let camera = Camera::new(CameraConfig::default())?;

    let sdl2_context = sdl2::init()?;
    let mut canvas = sdl2_context
        .video()?
        .window(
            "pathtracer",
            camera.image_width() as u32,
            camera.image_height() as u32,
        )
        .position_centered()
        .build()?
        .into_canvas()
        .build()?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator.create_texture_streaming(
        sdl2::pixels::PixelFormatEnum::RGBA32,
        camera.image_width() as u32,
        camera.image_height() as u32,
    )?;
    let mut events = sdl2_context.event_pump()?;

    log::info!(
        "rendering {}x{} at {} objects",
        camera.image_width(),
        camera.image_height(),
        world.len()
    );
    let start = Instant::now();
    let frame_buffer = camera.render(&world, SEED);
    log::info!("render finished in {:.2?}", start.elapsed());

    texture.update(
        sdl2::rect::Rect::new(
            0,
            0,
            camera.image_width() as u32,
            camera.image_height() as u32,
        ),
        frame_buffer.pixel_data(),
        camera.image_width() * 4,
    )?;
    canvas.copy(&texture, None, None)?;
    canvas.present();

    'main: loop {
        for event in events.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'main,
                _ => continue,
            }
        }
    }
    Ok(())
}

fn demo_scene() -> Result<World, pathtracer::Error> {
    let ground = Arc::new(Material::Lambertian {
        albedo: Color::new(0.8, 0.8, 0.0),
    });
    let center = Arc::new(Material::Lambertian {
        albedo: Color::new(0.1, 0.2, 0.5),
    });
    let glass = Arc::new(Material::Dielectric {
        refraction_index: 1.5,
    });
    let metal = Arc::new(Material::Metal {
        albedo: Color::new(0.8, 0.6, 0.2),
        fuzz: 0.3,
    });

    let mut world = World::new();
    world.push(Arc::new(Sphere::new(
        Point::new(0.0, -100.5, -1.0),
        100.0,
        ground,
    )?) as Arc<dyn Hit>);
    world.push(Arc::new(Sphere::new(Point::new(0.0, 0.0, -1.0), 0.5, center)?) as Arc<dyn Hit>);
    world.push(Arc::new(Sphere::new(Point::new(-1.0, 0.0, -1.0), 0.5, glass)?) as Arc<dyn Hit>);
    world.push(Arc::new(Sphere::new(Point::new(1.0, 0.0, -1.0), 0.5, metal)?) as Arc<dyn Hit>);
    Ok(world)
}

use super::command::Command::{self, *};
use super::extension::Extension::*;
use super::version::Version::*;
use super::Gate;

/// Binding table: every core tier, oldest first, followed by every extension,
/// each with the entry points it introduces. An entry point may be listed
/// under several gates; it is bound as soon as any of them is present.
pub static FEATURES: &[(Gate, &[Command])] = &[
    (
        Gate::Version(V1_0),
        &[
            BlendFunc,
            Clear,
            ClearColor,
            ClearDepth,
            ClearStencil,
            ColorMask,
            CullFace,
            DepthFunc,
            DepthMask,
            Disable,
            DrawBuffer,
            Enable,
            Finish,
            Flush,
            FrontFace,
            GetError,
            GetIntegerv,
            GetString,
            Hint,
            LineWidth,
            PixelStorei,
            PointSize,
            PolygonMode,
            ReadBuffer,
            ReadPixels,
            Scissor,
            TexImage2D,
            TexParameterf,
            TexParameteri,
            Viewport,
        ],
    ),
    (
        Gate::Version(V1_1),
        &[
            BindTexture,
            DeleteTextures,
            DrawArrays,
            DrawElements,
            GenTextures,
            IsTexture,
            PolygonOffset,
            TexSubImage2D,
        ],
    ),
    (
        Gate::Version(V1_2),
        &[DrawRangeElements, TexImage3D, TexSubImage3D],
    ),
    (
        Gate::Version(V1_3),
        &[
            ActiveTexture,
            ClientActiveTexture,
            CompressedTexImage2D,
            MultiTexCoord2f,
            SampleCoverage,
        ],
    ),
    (
        Gate::Version(V1_4),
        &[
            BlendColor,
            BlendEquation,
            BlendFuncSeparate,
            MultiDrawArrays,
            PointParameterf,
            PointParameteri,
        ],
    ),
    (
        Gate::Version(V1_5),
        &[
            BeginQuery,
            BindBuffer,
            BufferData,
            BufferSubData,
            DeleteBuffers,
            EndQuery,
            GenBuffers,
            GenQueries,
            IsBuffer,
            MapBuffer,
            UnmapBuffer,
        ],
    ),
    (
        Gate::Version(V2_0),
        &[
            AttachShader,
            BlendEquationSeparate,
            CompileShader,
            CreateProgram,
            CreateShader,
            DeleteProgram,
            DeleteShader,
            DisableVertexAttribArray,
            DrawBuffers,
            EnableVertexAttribArray,
            GetProgramiv,
            GetShaderiv,
            GetUniformLocation,
            LinkProgram,
            ShaderSource,
            StencilFuncSeparate,
            Uniform1i,
            Uniform4f,
            UniformMatrix4fv,
            UseProgram,
            VertexAttribPointer,
        ],
    ),
    (
        Gate::Version(V2_1),
        &[UniformMatrix2x3fv, UniformMatrix4x3fv],
    ),
    (
        Gate::Version(V3_0),
        &[
            BindBufferBase,
            BindFramebuffer,
            BindRenderbuffer,
            BindVertexArray,
            BlitFramebuffer,
            CheckFramebufferStatus,
            ClampColor,
            ClearBufferfv,
            DeleteFramebuffers,
            DeleteVertexArrays,
            FlushMappedBufferRange,
            FramebufferRenderbuffer,
            FramebufferTexture2D,
            GenFramebuffers,
            GenRenderbuffers,
            GenVertexArrays,
            GenerateMipmap,
            GetStringi,
            MapBufferRange,
            RenderbufferStorage,
            RenderbufferStorageMultisample,
            VertexAttribIPointer,
        ],
    ),
    (
        Gate::Version(V3_1),
        &[
            DrawArraysInstanced,
            DrawElementsInstanced,
            GetUniformBlockIndex,
            PrimitiveRestartIndex,
            TexBuffer,
            UniformBlockBinding,
        ],
    ),
    (
        Gate::Version(V3_2),
        &[
            ClientWaitSync,
            DeleteSync,
            DrawElementsBaseVertex,
            FenceSync,
            FramebufferTexture,
            GetInteger64v,
        ],
    ),
    (
        Gate::Version(V3_3),
        &[
            BindFragDataLocationIndexed,
            BindSampler,
            GenSamplers,
            GetQueryObjecti64v,
            QueryCounter,
            SamplerParameteri,
            VertexAttribDivisor,
        ],
    ),
    (
        Gate::Version(V4_0),
        &[
            BlendEquationi,
            DrawArraysIndirect,
            MinSampleShading,
            PatchParameteri,
        ],
    ),
    (
        Gate::Version(V4_1),
        &[
            ClearDepthf,
            DepthRangef,
            GetProgramBinary,
            ProgramBinary,
            ProgramParameteri,
            ReleaseShaderCompiler,
            ShaderBinary,
        ],
    ),
    (
        Gate::Version(V4_2),
        &[
            BindImageTexture,
            DrawArraysInstancedBaseInstance,
            MemoryBarrier,
            TexStorage2D,
        ],
    ),
    (
        Gate::Version(V4_3),
        &[
            CopyImageSubData,
            DebugMessageCallback,
            DebugMessageControl,
            DebugMessageInsert,
            DispatchCompute,
            GetDebugMessageLog,
            MultiDrawArraysIndirect,
            ObjectLabel,
            PopDebugGroup,
            PushDebugGroup,
        ],
    ),
    (
        Gate::Version(V4_4),
        &[BindBuffersBase, BufferStorage, ClearTexImage],
    ),
    (
        Gate::Version(V4_5),
        &[
            ClipControl,
            CreateBuffers,
            CreateTextures,
            CreateVertexArrays,
            GetGraphicsResetStatus,
            NamedBufferData,
            TextureBarrier,
            TextureStorage2D,
        ],
    ),
    (
        Gate::Version(V4_6),
        &[
            MultiDrawArraysIndirectCount,
            PolygonOffsetClamp,
            SpecializeShader,
        ],
    ),
    (
        Gate::Extension(AMD_debug_output),
        &[
            DebugMessageCallbackAMD,
            DebugMessageEnableAMD,
            DebugMessageInsertAMD,
        ],
    ),
    (
        Gate::Extension(AMD_draw_buffers_blend),
        &[BlendEquationIndexedAMD],
    ),
    (
        Gate::Extension(AMD_multi_draw_indirect),
        &[MultiDrawArraysIndirectAMD],
    ),
    (
        Gate::Extension(APPLE_flush_buffer_range),
        &[FlushMappedBufferRangeAPPLE],
    ),
    (
        Gate::Extension(APPLE_vertex_array_object),
        &[
            BindVertexArrayAPPLE,
            DeleteVertexArraysAPPLE,
            GenVertexArraysAPPLE,
        ],
    ),
    (
        Gate::Extension(ARB_ES2_compatibility),
        &[
            ClearDepthf,
            DepthRangef,
            ReleaseShaderCompiler,
            ShaderBinary,
        ],
    ),
    (
        Gate::Extension(ARB_base_instance),
        &[DrawArraysInstancedBaseInstance],
    ),
    (
        Gate::Extension(ARB_blend_func_extended),
        &[BindFragDataLocationIndexed],
    ),
    (Gate::Extension(ARB_buffer_storage), &[BufferStorage]),
    (Gate::Extension(ARB_clear_texture), &[ClearTexImage]),
    (Gate::Extension(ARB_clip_control), &[ClipControl]),
    (Gate::Extension(ARB_color_buffer_float), &[ClampColorARB]),
    (Gate::Extension(ARB_compute_shader), &[DispatchCompute]),
    (Gate::Extension(ARB_copy_image), &[CopyImageSubData]),
    (
        Gate::Extension(ARB_debug_output),
        &[
            DebugMessageCallbackARB,
            DebugMessageControlARB,
            DebugMessageInsertARB,
            GetDebugMessageLogARB,
        ],
    ),
    (
        Gate::Extension(ARB_direct_state_access),
        &[
            CreateBuffers,
            CreateTextures,
            CreateVertexArrays,
            NamedBufferData,
            TextureBarrier,
            TextureStorage2D,
        ],
    ),
    (Gate::Extension(ARB_draw_buffers), &[DrawBuffersARB]),
    (Gate::Extension(ARB_draw_buffers_blend), &[BlendEquationiARB]),
    (
        Gate::Extension(ARB_draw_elements_base_vertex),
        &[DrawElementsBaseVertex],
    ),
    (Gate::Extension(ARB_draw_indirect), &[DrawArraysIndirect]),
    (
        Gate::Extension(ARB_draw_instanced),
        &[DrawArraysInstancedARB, DrawElementsInstancedARB],
    ),
    (
        Gate::Extension(ARB_fragment_program),
        &[
            BindProgramARB,
            DeleteProgramsARB,
            GenProgramsARB,
            ProgramStringARB,
        ],
    ),
    (
        Gate::Extension(ARB_framebuffer_object),
        &[
            BindFramebuffer,
            BindRenderbuffer,
            BlitFramebuffer,
            CheckFramebufferStatus,
            DeleteFramebuffers,
            FramebufferRenderbuffer,
            FramebufferTexture2D,
            GenFramebuffers,
            GenRenderbuffers,
            GenerateMipmap,
            RenderbufferStorage,
            RenderbufferStorageMultisample,
        ],
    ),
    (
        Gate::Extension(ARB_geometry_shader4),
        &[FramebufferTextureARB, ProgramParameteriARB],
    ),
    (
        Gate::Extension(ARB_get_program_binary),
        &[GetProgramBinary, ProgramBinary, ProgramParameteri],
    ),
    (Gate::Extension(ARB_gl_spirv), &[SpecializeShaderARB]),
    (Gate::Extension(ARB_imaging), &[BlendColor, BlendEquation]),
    (
        Gate::Extension(ARB_indirect_parameters),
        &[MultiDrawArraysIndirectCountARB],
    ),
    (Gate::Extension(ARB_instanced_arrays), &[VertexAttribDivisorARB]),
    (
        Gate::Extension(ARB_map_buffer_range),
        &[FlushMappedBufferRange, MapBufferRange],
    ),
    (Gate::Extension(ARB_multi_bind), &[BindBuffersBase]),
    (
        Gate::Extension(ARB_multi_draw_indirect),
        &[MultiDrawArraysIndirect],
    ),
    (Gate::Extension(ARB_multisample), &[SampleCoverageARB]),
    (
        Gate::Extension(ARB_multitexture),
        &[
            ActiveTextureARB,
            ClientActiveTextureARB,
            MultiTexCoord2fARB,
        ],
    ),
    (
        Gate::Extension(ARB_occlusion_query),
        &[BeginQueryARB, EndQueryARB, GenQueriesARB],
    ),
    (
        Gate::Extension(ARB_parallel_shader_compile),
        &[MaxShaderCompilerThreadsARB],
    ),
    (Gate::Extension(ARB_point_parameters), &[PointParameterfARB]),
    (
        Gate::Extension(ARB_polygon_offset_clamp),
        &[PolygonOffsetClamp],
    ),
    (Gate::Extension(ARB_robustness), &[GetGraphicsResetStatusARB]),
    (Gate::Extension(ARB_sample_shading), &[MinSampleShadingARB]),
    (
        Gate::Extension(ARB_sampler_objects),
        &[BindSampler, GenSamplers, SamplerParameteri],
    ),
    (
        Gate::Extension(ARB_shader_image_load_store),
        &[BindImageTexture, MemoryBarrier],
    ),
    (
        Gate::Extension(ARB_shader_objects),
        &[Uniform1iARB, Uniform4fARB, UniformMatrix4fvARB],
    ),
    (
        Gate::Extension(ARB_sync),
        &[ClientWaitSync, DeleteSync, FenceSync, GetInteger64v],
    ),
    (Gate::Extension(ARB_tessellation_shader), &[PatchParameteri]),
    (Gate::Extension(ARB_texture_barrier), &[TextureBarrier]),
    (Gate::Extension(ARB_texture_buffer_object), &[TexBufferARB]),
    (
        Gate::Extension(ARB_texture_compression),
        &[CompressedTexImage2DARB],
    ),
    (Gate::Extension(ARB_texture_storage), &[TexStorage2D]),
    (
        Gate::Extension(ARB_timer_query),
        &[GetQueryObjecti64v, QueryCounter],
    ),
    (
        Gate::Extension(ARB_uniform_buffer_object),
        &[BindBufferBase, GetUniformBlockIndex, UniformBlockBinding],
    ),
    (
        Gate::Extension(ARB_vertex_array_object),
        &[BindVertexArray, DeleteVertexArrays, GenVertexArrays],
    ),
    (
        Gate::Extension(ARB_vertex_buffer_object),
        &[
            BindBufferARB,
            BufferDataARB,
            BufferSubDataARB,
            DeleteBuffersARB,
            GenBuffersARB,
            IsBufferARB,
            MapBufferARB,
            UnmapBufferARB,
        ],
    ),
    (
        Gate::Extension(ARB_vertex_program),
        &[
            BindProgramARB,
            DeleteProgramsARB,
            DisableVertexAttribArrayARB,
            EnableVertexAttribArrayARB,
            GenProgramsARB,
            ProgramStringARB,
            VertexAttribPointerARB,
        ],
    ),
    (
        Gate::Extension(ARB_vertex_shader),
        &[
            BindAttribLocationARB,
            DisableVertexAttribArrayARB,
            EnableVertexAttribArrayARB,
            VertexAttribPointerARB,
        ],
    ),
    (Gate::Extension(ATI_draw_buffers), &[DrawBuffersATI]),
    (Gate::Extension(EXT_blend_color), &[BlendColorEXT]),
    (
        Gate::Extension(EXT_blend_equation_separate),
        &[BlendEquationSeparateEXT],
    ),
    (
        Gate::Extension(EXT_blend_func_separate),
        &[BlendFuncSeparateEXT],
    ),
    (Gate::Extension(EXT_blend_minmax), &[BlendEquationEXT]),
    (Gate::Extension(EXT_debug_label), &[LabelObjectEXT]),
    (
        Gate::Extension(EXT_debug_marker),
        &[PopGroupMarkerEXT, PushGroupMarkerEXT],
    ),
    (
        Gate::Extension(EXT_direct_state_access),
        &[NamedBufferDataEXT],
    ),
    (
        Gate::Extension(EXT_draw_instanced),
        &[DrawArraysInstancedEXT, DrawElementsInstancedEXT],
    ),
    (
        Gate::Extension(EXT_draw_range_elements),
        &[DrawRangeElementsEXT],
    ),
    (Gate::Extension(EXT_framebuffer_blit), &[BlitFramebufferEXT]),
    (
        Gate::Extension(EXT_framebuffer_multisample),
        &[RenderbufferStorageMultisampleEXT],
    ),
    (
        Gate::Extension(EXT_framebuffer_object),
        &[
            BindFramebufferEXT,
            BindRenderbufferEXT,
            CheckFramebufferStatusEXT,
            DeleteFramebuffersEXT,
            FramebufferRenderbufferEXT,
            FramebufferTexture2DEXT,
            GenFramebuffersEXT,
            GenRenderbuffersEXT,
            GenerateMipmapEXT,
            RenderbufferStorageEXT,
        ],
    ),
    (
        Gate::Extension(EXT_geometry_shader4),
        &[ProgramParameteriEXT],
    ),
    (
        Gate::Extension(EXT_multi_draw_arrays),
        &[MultiDrawArraysEXT],
    ),
    (Gate::Extension(EXT_point_parameters), &[PointParameterfEXT]),
    (
        Gate::Extension(EXT_polygon_offset_clamp),
        &[PolygonOffsetClampEXT],
    ),
    (
        Gate::Extension(EXT_shader_image_load_store),
        &[MemoryBarrierEXT],
    ),
    (
        Gate::Extension(EXT_texture3D),
        &[TexImage3DEXT, TexSubImage3DEXT],
    ),
    (Gate::Extension(EXT_texture_buffer_object), &[TexBufferEXT]),
    (Gate::Extension(EXT_texture_object), &[BindTextureEXT]),
    (Gate::Extension(EXT_texture_storage), &[TexStorage2DEXT]),
    (Gate::Extension(EXT_timer_query), &[GetQueryObjecti64vEXT]),
    (Gate::Extension(EXT_transform_feedback), &[BindBufferBaseEXT]),
    (Gate::Extension(EXT_vertex_array), &[DrawArraysEXT]),
    (
        Gate::Extension(INGR_blend_func_separate),
        &[BlendFuncSeparateINGR],
    ),
    (
        Gate::Extension(KHR_blend_equation_advanced),
        &[BlendBarrierKHR],
    ),
    (
        Gate::Extension(KHR_debug),
        &[
            DebugMessageCallback,
            DebugMessageControl,
            DebugMessageInsert,
            GetDebugMessageLog,
            ObjectLabel,
            PopDebugGroup,
            PushDebugGroup,
        ],
    ),
    (
        Gate::Extension(KHR_parallel_shader_compile),
        &[MaxShaderCompilerThreadsKHR],
    ),
    (Gate::Extension(KHR_robustness), &[GetGraphicsResetStatus]),
    (
        Gate::Extension(NV_blend_equation_advanced),
        &[BlendBarrierNV],
    ),
    (Gate::Extension(NV_copy_image), &[CopyImageSubDataNV]),
    (
        Gate::Extension(NV_geometry_program4),
        &[FramebufferTextureEXT],
    ),
    (
        Gate::Extension(NV_primitive_restart),
        &[PrimitiveRestartIndexNV],
    ),
    (Gate::Extension(NV_texture_barrier), &[TextureBarrierNV]),
    (Gate::Extension(NV_transform_feedback), &[BindBufferBaseNV]),
    (
        Gate::Extension(NV_vertex_program),
        &[BindProgramNV, DeleteProgramsNV, GenProgramsNV],
    ),
    (
        Gate::Extension(NV_vertex_program4),
        &[VertexAttribIPointerEXT],
    ),
    (
        Gate::Extension(OES_single_precision),
        &[ClearDepthfOES, DepthRangefOES],
    ),
    (
        Gate::Extension(SGIS_point_parameters),
        &[PointParameterfSGIS],
    ),
];
